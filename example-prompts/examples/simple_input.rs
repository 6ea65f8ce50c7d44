//! Read single values without a derived record.
//!
//! Run with: cargo run -p example-prompts --example simple_input

use derive_ask::Asker;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut asker = Asker::new();
    let name = asker.ask_string("What is your name?")?;
    let color = asker.ask_string_or("Favorite color", "green")?;
    println!("Hello, {name}! Your favorite color is {color}.");
    Ok(())
}
