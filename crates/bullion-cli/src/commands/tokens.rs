use bullion_core::find_tokens;

use crate::cli::ContentArgs;
use crate::error::CliError;

use super::{read_content, CommandOutput};

pub fn run(args: &ContentArgs) -> Result<CommandOutput, CliError> {
    let content = read_content(args)?;
    Ok(CommandOutput::Tokens(find_tokens(&content)))
}
