mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;

/// Run the CLI with parsed flags.
pub fn run(flags: CliFlags) -> anyhow::Result<()> {
    quiet::set(flags.quiet);
    Context::new(flags).run()
}
