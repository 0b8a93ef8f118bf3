//! The `Command` trait shared by every subcommand

use crate::common::RuntimeContext;
use crate::error::Result;

/// A subcommand that runs against the resolved configuration
///
/// `run`, for instance, resolves the hooks root from the context, loads the
/// hooks in scope and turns the report's verdict into its error:
///
/// ```rust,ignore
/// impl Command for RunCommand {
///     type Output = ();
///
///     fn execute(&self, context: &RuntimeContext) -> Result<()> {
///         let hooks = HookLoader::new(context.hooks_root()?).load(&self.scope())?;
///         let report = HookRunner::builder()
///             .config(&context.config.run)
///             .commit_message(self.commit_msg.clone())
///             .build()
///             .run(&hooks)?;
///         report.verdict()?;
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// Value handed back to the dispatcher
    type Output;

    /// # Errors
    ///
    /// Any `CommandError`; hook failures arrive as the core `HooksFailed`
    /// error carried by `CommandError::Core`.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
