use crate::cli::{args::NormalizeArgs, global::GlobalArgs};
use bua_prep::{aggregate::read_text, layout::write_text, simplify};
use std::io::{self, Read, Write};

pub fn handle(args: NormalizeArgs, _global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Read input text
    let input_text = if let Some(file_path) = &args.file {
        read_text(file_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
            .strip_prefix('\u{feff}')
            .map(str::to_string)
            .unwrap_or(buffer)
    };

    let output = simplify(&input_text);

    if let Some(output_path) = &args.output {
        write_text(output_path, &output)?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
