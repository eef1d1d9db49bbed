//! CSV reading entry points.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SeedDataError;
use crate::seed::PokemonSeed;

/// Read all seed rows from a CSV file on disk.
///
/// # Errors
///
/// Returns [`SeedDataError::Io`] when the file cannot be opened and
/// [`SeedDataError::Malformed`] when any row fails to parse. A single bad row
/// fails the whole read.
pub fn read_seed_file(path: impl AsRef<Path>) -> Result<Vec<PokemonSeed>, SeedDataError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|source| SeedDataError::io(path.display().to_string(), source))?;
    parse_seed_rows(file)
}

/// Parse seed rows from any CSV source with the expected header.
///
/// # Errors
///
/// Returns [`SeedDataError::Malformed`] on the first row that fails to
/// deserialize, including non-numeric values in numeric columns and missing
/// header fields.
pub fn parse_seed_rows(source: impl Read) -> Result<Vec<PokemonSeed>, SeedDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);
    reader
        .deserialize()
        .map(|row| row.map_err(SeedDataError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const HEADER: &str = "Name,Base Experience,Height,Weight,Image URL\n";

    fn parse(body: &str) -> Result<Vec<PokemonSeed>, SeedDataError> {
        parse_seed_rows(format!("{HEADER}{body}").as_bytes())
    }

    #[rstest]
    fn parses_rows_in_order() {
        let rows = parse("Bulbasaur,64,7,69,a.png\nIvysaur,142,10,130,b.png\n")
            .expect("rows should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Bulbasaur");
        assert_eq!(rows[1].name, "Ivysaur");
    }

    #[rstest]
    fn empty_numeric_cells_become_absent_not_zero() {
        let rows = parse("MissingNo,,,,ghost.png\n").expect("row should parse");
        assert_eq!(rows[0].base_experience, None);
        assert_eq!(rows[0].height, None);
        assert_eq!(rows[0].weight, None);
        assert_eq!(rows[0].image_url, "ghost.png");
    }

    #[rstest]
    #[case("Glitch,lots,7,69,x.png\n")]
    #[case("Glitch,64,tall,69,x.png\n")]
    #[case("Glitch,64,7,heavy,x.png\n")]
    fn non_numeric_cell_fails_the_whole_read(#[case] body: &str) {
        let err = parse(body).expect_err("malformed numeric cell should fail");
        assert!(matches!(err, SeedDataError::Malformed(_)));
    }

    #[rstest]
    fn one_bad_row_fails_even_with_good_rows_present() {
        let result = parse("Bulbasaur,64,7,69,a.png\nGlitch,NaN,7,69,x.png\n");
        assert!(result.is_err());
    }

    #[rstest]
    fn missing_header_field_is_an_error() {
        let result = parse_seed_rows("Name,Height\nBulbasaur,7\n".as_bytes());
        assert!(matches!(result, Err(SeedDataError::Malformed(_))));
    }

    #[rstest]
    fn empty_source_yields_no_rows() {
        let rows = parse("").expect("header-only source should parse");
        assert!(rows.is_empty());
    }

    #[rstest]
    fn read_seed_file_reports_missing_file_with_path() {
        let err = read_seed_file("definitely/not/here.csv").expect_err("missing file");
        match err {
            SeedDataError::Io { path, .. } => assert!(path.contains("not/here.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
