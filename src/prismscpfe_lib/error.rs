use std::fmt::Display;

use crate::constants::ERROR_STYLE;
use crate::constants::HELP_STYLE;

/// An error context: what went wrong, and what the user can do about it.
///
/// Both halves implement [Display] and are printed below the root cause.
/// An empty half is not printed.
///
/// ```should_panic
/// # use prismscpfe_lib::error::Ctx;
/// # use anyhow::anyhow;
/// # use anyhow::Result;
/// # use anyhow::Context;
/// # fn main() -> Result<()> {
/// Err(anyhow!("connection refused")).context(Ctx(
///     "Could not reach the record service",
///     "Check the [remote] url in prismscpfe.toml",
/// ))
/// # }
/// ```
#[derive(Debug)]
pub struct Ctx<A, B>(pub A, pub B)
where
    A: Display,
    B: Display;

impl<A: Display, B: Display> Display for Ctx<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cause = self.0.to_string();
        let help = self.1.to_string();

        if !cause.is_empty() {
            writeln!(f, "{ERROR_STYLE}caused by:{ERROR_STYLE:#} {cause}")?;
        }

        if !help.is_empty() {
            writeln!(f, "\n{HELP_STYLE}help:{HELP_STYLE:#} {help}")?;
        }

        Ok(())
    }
}

/// Build a lazily formatted [Ctx] for use with `with_context`.
///
/// ```ignore
/// ctx!([context], [context args]...; [help], [help args]...)
/// ```
/// desugars to
/// ```ignore
/// || Ctx(format!([context], [context args]...), format!([help], [help args]...))
/// ```
///
/// The `;` and trailing `,` are required.
///
/// ```no_run
/// # use prismscpfe_lib::ctx;
/// # use std::path::PathBuf;
/// # use anyhow::Context;
/// # let path: PathBuf = "parameters.in".parse().unwrap();
/// std::fs::read(&path).with_context(ctx!(
///   "Could not read {path:?}", ;
///   "Run prismscpfe from the directory of your simulation",
/// ));
/// ```
#[macro_export]
macro_rules! ctx {
    {$cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
      || $crate::error::Ctx(format!($cause, $($arg_cause)*), format!($help, $($arg_help)*))
    };
}

/// Return early with an error that carries a [Ctx].
///
/// ```no_run
/// # use prismscpfe_lib::bailc;
/// # use anyhow::Context;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// bailc!("No process found", ; "Nothing to link", ; "Create one first", );
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! bailc {
    {$text: expr,  $($arg_text: expr)*; $cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
        return Err(anyhow::anyhow!($text, $($arg_text)*)).with_context($crate::error::ctx!($cause, $($arg_cause)*; $help, $($arg_help)*));
    };
    {$text: expr $(,$arg_text: expr)*} => {
        return Err(anyhow::anyhow!($text, $($arg_text)*)).with_context($crate::error::ctx!("",;"",));
    };
}

pub use ctx;
