// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Coursedates v{} - Extracts important dates from course documents",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} scan <file.txt> --course <name> [--pdf]",
        binary_name
    );
    println!(
        "    {} assignments <file.json> --course <name>",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --course <name>    Course label attached to every extracted event.");
    println!("    --pdf              Treat the text as PDF-extracted (newline-only splitting).");
    println!("    -h, --help         Show this help message.");
    println!();
    println!("SCAN COMMAND:");
    println!(
        "    {} scan syllabus.txt --course CS101          Extract dates from syllabus text",
        binary_name
    );
    println!(
        "    {} scan syllabus.txt --course CS101 --pdf    Same, for PDF-extracted text",
        binary_name
    );
    println!();
    println!("ASSIGNMENTS COMMAND:");
    println!(
        "    {} assignments dump.json --course CS101      Normalize an assignment JSON dump",
        binary_name
    );
    println!();
    println!("Events are printed to stdout as a JSON array, deduplicated and");
    println!("sorted ascending by date. An empty array means no dates were found.");
    println!();
    println!("Keyword list, year window and truncation length can be overridden in");
    println!("the config file (see `coursedates` config dir; COURSEDATES_TEST_DIR");
    println!("relocates it).");
}
