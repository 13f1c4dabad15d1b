use std::fs;

use tempdir::TempDir;

use super::*;
use crate::test_utils::REAL_FS;

const SAMPLE_FILE: &str = r#"
# Mesh
set Order of finite elements = 1
set Domain size X   =   1.0

set Output Directory = .
subsection Boundary Conditions: 0
    set Face = 1
    set Value = 0.0
end
subsection Boundary Conditions: 1
    set Face = 2
    set Value = 0.001
end
set Total time = 1.0
"#;

#[test]
fn test_skip_blank_and_comment_lines() {
    assert_eq!(classify(""), Line::Skip);
    assert_eq!(classify("   \t  "), Line::Skip);
    assert_eq!(classify("# set Foo = 1"), Line::Skip);
    assert_eq!(classify("   #set Foo = 1"), Line::Skip);

    assert!(flatten("\n\n# set Foo = 1\n   \n").is_empty());
}

#[test]
fn test_classify_control_lines() {
    assert_eq!(
        classify("subsection Boundary Conditions: 0"),
        Line::Subsection("Boundary Conditions (0)".to_string())
    );
    assert_eq!(classify("  end  "), Line::End);
    assert_eq!(classify("set a = b"), Line::Set(vec!["set", "a", "=", "b"]));
    assert_eq!(classify("include other.prm"), Line::Other);
}

#[test]
fn test_subsection_label_malformed_headers() {
    assert_eq!(subsection_label(&["subsection", "Loading:"]), " (Loading:)");
    assert_eq!(subsection_label(&["subsection"]), " (subsection)");
    assert_eq!(
        subsection_label(&["subsection", "Grain", "Data", "x"]),
        "Grain Dat (x)"
    );
}

#[test]
fn test_boundary_condition_subsection() {
    let set = flatten("subsection Boundary Conditions: 3\nset Value = 5\nend\n");

    assert_eq!(set.len(), 1);
    assert_eq!(set["Boundary Conditions (3): Value"], "5");
}

#[test]
fn test_set_without_equals() {
    let set = flatten("set Foo Bar");

    assert_eq!(set.len(), 1);
    assert_eq!(set["Foo"], INVALID_ENTRY);
}

#[test]
fn test_parse_assignment_edge_cases() {
    assert_eq!(
        parse_assignment(&["set", "a", "=", "b", "=", "c"]),
        ("a = b".to_string(), "c".to_string())
    );
    assert_eq!(
        parse_assignment(&["set", "Key", "="]),
        ("Key".to_string(), "".to_string())
    );
    assert_eq!(
        parse_assignment(&["set"]),
        ("".to_string(), INVALID_ENTRY.to_string())
    );
    assert_eq!(
        parse_assignment(&["set", "a=b"]),
        ("".to_string(), INVALID_ENTRY.to_string())
    );
}

#[test]
fn test_whitespace_is_normalised() {
    let set = flatten("set   Domain\tsize  X =  1.0   2.0");

    assert_eq!(set["Domain size X"], "1.0 2.0");
}

#[test]
fn test_last_write_wins() {
    let set = flatten(
        "set Total time = 1\n\
         set Total time = 2\n\
         subsection Loads: 0\n\
         set Value = 1\n\
         end\n\
         subsection Loads: 0\n\
         set Value = 7\n\
         end\n",
    );

    assert_eq!(set.len(), 2);
    assert_eq!(set["Total time"], "2");
    assert_eq!(set["Loads (0): Value"], "7");
}

#[test]
fn test_nested_subsection_redefines_label() {
    let set = flatten(
        "subsection Outer: a\n\
         subsection Inner: b\n\
         set Key = 1\n\
         end\n\
         set Key = 2\n\
         end\n",
    );

    assert_eq!(set["Inner (b): Key"], "1");
    assert_eq!(set["Key"], "2");
    assert!(!set.contains_key("Outer (a): Key"));
}

#[test]
fn test_end_without_subsection() {
    let set = flatten("end\nset Key = 1\nend\n");

    assert_eq!(set.len(), 1);
    assert_eq!(set["Key"], "1");
}

#[test]
fn test_flatten_sample_file() {
    let set = flatten(SAMPLE_FILE);

    assert_eq!(set.len(), 8);
    assert_eq!(set["Order of finite elements"], "1");
    assert_eq!(set["Domain size X"], "1.0");
    assert_eq!(set["Output Directory"], ".");
    assert_eq!(set["Boundary Conditions (0): Face"], "1");
    assert_eq!(set["Boundary Conditions (1): Value"], "0.001");
    assert_eq!(set["Total time"], "1.0");
}

#[test]
fn test_flatten_is_idempotent() {
    assert_eq!(flatten(SAMPLE_FILE), flatten(SAMPLE_FILE));
}

#[test]
fn test_parse_parameters_file() {
    let dir = TempDir::new("parameters").unwrap();
    fs::write(dir.path().join(PARAMETERS_FILE), SAMPLE_FILE).unwrap();

    let set = parse_parameters_file(dir.path(), &REAL_FS).unwrap();
    assert_eq!(set, flatten(SAMPLE_FILE));
}

#[test]
fn test_parse_parameters_file_missing() {
    let dir = TempDir::new("parameters").unwrap();

    let err = parse_parameters_file(dir.path(), &REAL_FS).unwrap_err();
    assert!(format!("{err:#}").contains("Could not load the PRISMS-CPFE input file"));
}

#[test]
fn test_read_parameters_file() {
    let dir = TempDir::new("parameters").unwrap();

    let err = read_parameters_file(dir.path(), &REAL_FS).unwrap_err();
    assert!(format!("{err:#}").contains("directory containing parameters.in"));

    fs::write(dir.path().join(PARAMETERS_FILE), SAMPLE_FILE).unwrap();
    assert_eq!(
        read_parameters_file(dir.path(), &REAL_FS).unwrap(),
        SAMPLE_FILE
    );
}

#[test]
fn test_extract_parameter() {
    let contents = "set Slip Directions File = dirs.txt\n\
                    set Slip  Normals\tFile  =  normals.txt\n\
                    set SlipDirections File = other.txt extra\n\
                    set Grain ID file name = first.txt\n\
                    set Grain ID file name = second.txt\n\
                    set Twin Normals File =\n";

    assert_eq!(
        extract_parameter(contents, "Slip Directions File"),
        Some("dirs.txt".to_string())
    );
    assert_eq!(
        extract_parameter(contents, "Slip Normals File"),
        Some("normals.txt".to_string())
    );
    assert_eq!(
        extract_parameter(contents, "Grain ID file name"),
        Some("second.txt".to_string())
    );
    assert_eq!(extract_parameter(contents, "Twin Normals File"), None);
    assert_eq!(extract_parameter(contents, "Orientations file name"), None);
}
