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
    let mut zero_click_count = 0;
    for rotation in &rotations {
        // Count touches from the pre-rotation position, then turn the dial.
        zero_click_count += dial.zero_touch_count(rotation);
        dial.rotate(rotation);
    }
    println!(
        "During rotation(s), the dial points at 0 on {} click(s), which is the password.",
        zero_click_count
    );

    Ok(())
}
