use clap::Parser;
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(version, about = "Tiny C-subset compiler", long_about = None)]
pub struct Args {
    /// Print the token stream and stop
    #[arg(long)]
    pub lex: bool,

    /// Print the syntax tree and stop
    #[arg(long)]
    pub parse: bool,

    /// Print the generated instruction list and stop
    #[arg(long)]
    pub codegen: bool,

    /// Assembly output path (defaults to INPUT with a .s extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the assembly to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    pub input: PathBuf,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut asm_file = self.input.clone();
            asm_file.set_extension("s");
            asm_file
        })
    }

    pub fn stops_early(&self) -> bool {
        self.lex || self.parse || self.codegen
    }
}
