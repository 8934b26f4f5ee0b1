use std::io::Read;

use crate::error::Result;

pub fn execute() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let entries = repolist::parse(&input)?;
    println!("{}", serde_json::to_string(&entries)?);

    Ok(())
}
