use crate::parser::SmellCode;
use crate::utils::config::{NO_SMELL_TAG, SCHEMA_VERSION};

/// Display the smell codes recognized in input file names
pub fn display_smells() {
    println!("Recognized smell codes:");
    for code in SmellCode::ALL {
        println!("  {}", code);
    }
    println!();
    println!("Reserved tag for commits without smells: {}", NO_SMELL_TAG);
    println!("File names must end with _<CODE>.csv, e.g. 2017_7_18_11_25_HMU.csv");
}

/// Display version information
pub fn display_version() {
    println!("Smell Churn v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-commit introduced/refactored code smell counts.");
}
