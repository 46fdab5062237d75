use anyhow::Result;
use gazesmooth_common::FilterParams;

pub fn run(params: FilterParams) -> Result<()> {
    params.validate()?;
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
