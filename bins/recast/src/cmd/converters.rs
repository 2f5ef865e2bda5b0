use crate::config::ConvertersArgs;
use crate::error::CliError;

pub fn run(args: ConvertersArgs) -> Result<(), CliError> {
    let registry = super::load_config(args.config.as_deref())?.build_registry()?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
