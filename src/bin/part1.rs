use anyhow::{Context, Result};
use clap::Parser;
use secret_entrance::{CLIArgs, Dial};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let rotations = secret_entrance::read_rotations(&args.input_path).with_context(|| {
        format!(
            "Failed to read rotations from given input file({}).",
            args.input_path.display()
        )
    })?;

    let mut dial = Dial::new();
    let mut zero_rest_count = 0;
    for rotation in &rotations {
        dial.rotate(rotation);
        if dial.position() == 0 {
            zero_rest_count += 1;
        }
    }
    println!(
        "After rotation(s), the dial rests at 0 {} time(s), which is the password.",
        zero_rest_count
    );

    Ok(())
}
