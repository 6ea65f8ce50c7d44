use derive_ask::Ask;

/// A postal address, filled in as a nested sub-session.
#[derive(Debug, Default, Ask)]
pub struct Address {
    #[ask("Street")]
    pub street: Option<String>,

    #[ask("City")]
    pub city: Option<String>,

    #[ask("Postal code")]
    pub postal_code: Option<String>,
}

/// An order form with a recursive address field.
#[derive(Debug, Default, Ask)]
pub struct Order {
    #[ask("Customer name")]
    pub customer: Option<String>,

    #[ask("Quantity")]
    pub quantity: Option<u32>,

    #[ask("Shipping address", recursive)]
    pub address: Option<Address>,
}
