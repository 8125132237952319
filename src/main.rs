use clap::Parser;
use miette::Result;
use threadfit::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Resolve(args) => threadfit::cli::commands::resolve::run(args, &global),
        Commands::Sizes(args) => threadfit::cli::commands::sizes::run(args, &global),
        Commands::Key(args) => threadfit::cli::commands::key::run(args),
        Commands::Catalog(cmd) => threadfit::cli::commands::catalog::run(cmd, &global),
        Commands::Completions(args) => threadfit::cli::commands::completions::run(args),
    }
}
