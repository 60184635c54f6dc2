//! Tests for the pretty printer

use super::super::{FormatOptions, format};
use rstest::rstest;

const ELLIPSOID_CRS: &str = concat!(
    r#"GEOGCRS["WGS 84",DATUM["World Geodetic System 1984","#,
    r#"ELLIPSOID["WGS 84",6378137.0,298.257223563,LENGTHUNIT["metre",1.0]]],"#,
    r#"CS[ellipsoidal,2],AXIS["(Lat)",north],AXIS["(Lon)",east],"#,
    r#"ANGLEUNIT["degree",0.0174532925199433]]"#
);

/// Assert multiline formatting produces expected output
fn assert_format_multiline(input: &str, options: &FormatOptions, expected: &str) {
    let result = format(input, options);
    assert_eq!(
        result, expected,
        "\n=== Input ===\n{input}\n=== Expected ===\n{expected}\n=== Got ===\n{result}"
    );
}

#[test]
fn test_default_layout() {
    let expected = r#"GEOGCRS["WGS 84",
    DATUM["World Geodetic System 1984",
        ELLIPSOID["WGS 84",6378137.0,298.257223563,
            LENGTHUNIT["metre",1.0]]],
    CS[ellipsoidal,2],
    AXIS["(Lat)",north],
    AXIS["(Lon)",east],
    ANGLEUNIT["degree",0.0174532925199433]]"#;
    assert_format_multiline(ELLIPSOID_CRS, &FormatOptions::default(), expected);
}

#[test]
fn test_custom_newline_and_indent() {
    let input = r#"VERTCRS["h",VDATUM["d"],CS[vertical,1],AXIS["up",up]]"#;
    let options = FormatOptions::new("\r\n", "\t");
    let expected = "VERTCRS[\"h\",\r\n\tVDATUM[\"d\"],\r\n\tCS[vertical,1],\r\n\tAXIS[\"up\",up]]";
    assert_format_multiline(input, &options, expected);
}

#[rstest]
#[case(ELLIPSOID_CRS)]
#[case(r#"ID["EPSG",4326]"#)]
#[case(r#"REMARK["a ""quoted"" [remark], with, commas"]"#)]
fn test_empty_options_reproduce_input(#[case] input: &str) {
    let options = FormatOptions::new("", "");
    assert!(options.is_plain());
    assert_eq!(format(input, &options), input);
}

#[test]
fn test_words_inside_elements_stay_inline() {
    // Directions and CS types are words but never open an element
    let input = r#"CS[Cartesian,2],AXIS["x",east]"#;
    let result = format(input, &FormatOptions::default());
    assert_eq!(result, "CS[Cartesian,2],\nAXIS[\"x\",east]");
}

#[test]
fn test_indent_levels() {
    let options = FormatOptions::new("\n", "  ");
    assert_eq!(options.indent(0), "");
    assert_eq!(options.indent(3), "      ");
}
