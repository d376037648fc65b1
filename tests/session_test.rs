use marina_ledger::{run, MarinaError};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const BOAT_DATA: &str = "Bob,15,land,B,50.00
Alice,20,slip,5,100.00
alice,99,storage,1,9.99

Broken,10
Carl,30,trailor,XYZ123,0.00
";

fn data_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("BoatData.csv");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

#[test]
fn test_full_session_persists_changes() {
    let (_temp_dir, path) = data_file(BOAT_DATA);

    let commands = "i\n\
                    a\nDory,12,storage,4,0.00\n\
                    r\ncarl\n\
                    p\nALICE\n40\n\
                    m\n\
                    x\n";
    let mut output = Vec::new();
    run(&path, Cursor::new(commands), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Boat Inventory:"));
    assert!(output.contains("Payment of $40.00 accepted for 'ALICE'."));
    assert!(output.contains("Monthly charges applied."));
    assert!(output.ends_with("Exiting the Boat Management System\n"));

    // Alice: 100 - 40 + 20 * 12.50, Bob: 50 + 15 * 14, Dory: 12 * 11.20
    let expected = "Alice,20,slip,5,310.00
Bob,15,land,B,260.00
Dory,12,storage,4,134.40
";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_inventory_lists_loaded_boats_sorted() {
    let (_temp_dir, path) = data_file(BOAT_DATA);

    let mut output = Vec::new();
    run(&path, Cursor::new("I\nX\n"), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    let alice = output.find("Alice ").unwrap();
    let bob = output.find("Bob ").unwrap();
    let carl = output.find("Carl ").unwrap();
    assert!(alice < bob && bob < carl);
    assert!(!output.contains("Broken"));
    assert!(!output.contains("storage # 1 "));
}

#[test]
fn test_end_of_input_still_saves() {
    let (_temp_dir, path) = data_file("zed,10,slip,1,0\n");

    let mut output = Vec::new();
    run(&path, Cursor::new("m\n"), &mut output).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "zed,10,slip,1,125.00\n");
}

#[test]
fn test_missing_record_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("BoatData.csv");

    let mut output = Vec::new();
    let result = run(&path, Cursor::new("x\n"), &mut output);

    assert!(matches!(result, Err(MarinaError::SourceUnavailable { .. })));
    assert!(!path.exists());
}
