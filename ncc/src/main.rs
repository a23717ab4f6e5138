use arch::platform::Platform;
use clap::Parser;
use color_print::cprintln;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command};

use ncc::Error;

#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Input C source file
    input: PathBuf,

    /// Stop after lexing and print the tokens
    #[clap(long)]
    lex: bool,

    /// Stop after parsing and print the AST
    #[clap(long)]
    parse: bool,

    /// Stop after code generation and print the assembly representation
    #[clap(long)]
    codegen: bool,

    /// Emit assembly but do not assemble or link
    #[clap(short = 'S')]
    assembly: bool,

    /// Assemble to an object file but do not link
    #[clap(short = 'c')]
    object: bool,

    /// Output file
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Target platform to emit assembly for
    #[clap(long, default_value_t = Platform::host())]
    target: Platform,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

/// How far to run the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Lex,
    Parse,
    Codegen,
    Assembly,
    Object,
    Executable,
}

impl Args {
    fn stage(&self) -> Stage {
        if self.lex {
            Stage::Lex
        } else if self.parse {
            Stage::Parse
        } else if self.codegen {
            Stage::Codegen
        } else if self.assembly {
            Stage::Assembly
        } else if self.object {
            Stage::Object
        } else {
            Stage::Executable
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        cprintln!("<red,bold>error</>: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let stage = args.stage();

    // 1. Preprocess the input with the system compiler
    if args.verbose {
        cprintln!("<green>1.</> Preprocess {}", args.input.display());
    }
    let preprocessed = args.input.with_extension("i");
    command(
        Command::new("gcc")
            .args(["-E", "-P"])
            .arg(&args.input)
            .arg("-o")
            .arg(&preprocessed),
    )?;

    // 2. Read the preprocessed source and drop the intermediate file
    let src = fs::read_to_string(&preprocessed)?;
    let _ = fs::remove_file(&preprocessed);

    // 3. Tokenize
    if args.verbose {
        cprintln!("<green>2.</> Lex");
    }
    let tokens = ncc::lex(&src)?;
    if stage == Stage::Lex {
        println!("{:#?}", tokens);
        return Ok(());
    }

    // 4. Parse tokens into AST
    if args.verbose {
        cprintln!("<green>3.</> Parse");
    }
    let ast = ncc::Parser::new(&tokens).parse()?;
    if stage == Stage::Parse {
        println!("{:#?}", ast);
        return Ok(());
    }

    // 5. Generate code
    if args.verbose {
        cprintln!("<green>4.</> Codegen");
    }
    let asm = ncc::generate(&ast);
    if stage == Stage::Codegen {
        println!("{:#?}", asm);
        return Ok(());
    }

    // 6. Emit assembly text
    if args.verbose {
        cprintln!("<green>5.</> Emit ({})", args.target);
    }
    let asm_path = match (&args.output, stage) {
        (Some(path), Stage::Assembly) => path.clone(),
        _ => args.input.with_extension("s"),
    };
    ncc::emit_assembly(&asm_path, &asm, args.target)?;
    if stage == Stage::Assembly {
        return Ok(());
    }

    // 7. Assemble and link with the system compiler
    if args.verbose {
        cprintln!("<green>6.</> Assemble");
    }
    let out_path = match (&args.output, stage) {
        (Some(path), _) => path.clone(),
        (None, Stage::Object) => args.input.with_extension("o"),
        (None, _) => args.input.with_extension(""),
    };
    let mut cmd = Command::new("gcc");
    if stage == Stage::Object {
        cmd.arg("-c");
    }
    cmd.arg(&asm_path).arg("-o").arg(&out_path);
    let assembled = command(&mut cmd);

    // 8. Drop the intermediate assembly file
    let _ = fs::remove_file(&asm_path);
    assembled
}

fn command(cmd: &mut Command) -> Result<(), Error> {
    let status = cmd.status().map_err(Error::Io)?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Command(format!(
            "{:?} exited with {}",
            cmd.get_program(),
            status
        )))
    }
}
