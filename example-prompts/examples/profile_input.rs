//! Fill a [`Profile`] from the terminal.
//!
//! Run with: cargo run -p example-prompts --example profile_input

use derive_ask::Asker;
use example_prompts::Profile;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut asker = Asker::new();
    let profile = asker.ask_labeled("Please fill in this profile", Profile::default())?;
    println!("{profile:#?}");
    Ok(())
}
