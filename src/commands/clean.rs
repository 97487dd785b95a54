use anyhow::Result;
use tracing::info;

use crate::chunking::{CleanOptions, TextCleaner};
use crate::cli::CleanArgs;
use crate::util::read_input;

pub fn run(args: CleanArgs) -> Result<()> {
    let cleaner = TextCleaner::new()?;
    let text = read_input(&args.input)?;

    let cleaned = if args.quick {
        cleaner.quick_clean(&text)
    } else {
        let options = CleanOptions {
            remove_page_numbers: !args.keep_page_numbers,
            remove_links: !args.keep_links,
            remove_repeated_lines: !args.keep_repeated_lines,
            fix_ocr: args.fix_ocr,
        };
        cleaner.clean(&text, &options)
    };

    info!(
        input = %args.input.display(),
        bytes_in = text.len(),
        bytes_out = cleaned.len(),
        quick = args.quick,
        "cleaned input"
    );
    println!("{cleaned}");

    Ok(())
}
