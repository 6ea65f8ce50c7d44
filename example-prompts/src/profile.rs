use derive_ask::Ask;

/// A small profile form with mandatory and pre-filled fields.
#[derive(Debug, Ask)]
pub struct Profile {
    /// User's full name, asked until something is typed.
    #[ask]
    pub name: Option<String>,

    /// User's age.
    #[ask("How old are you?")]
    pub age: Option<i8>,

    /// Not annotated, so never asked for.
    pub session_id: u64,

    /// Starts out true, so an empty answer keeps it.
    #[ask("Are you sure?")]
    pub sure: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: None,
            age: None,
            session_id: 0,
            sure: true,
        }
    }
}
