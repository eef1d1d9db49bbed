//! Parsed seed row types.

use serde::Deserialize;

/// One row of the seed file.
///
/// Field names map onto the source header via serde renames. Numeric fields
/// are optional: an empty cell deserializes to `None` rather than zero, while
/// a non-numeric cell is a hard parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonSeed {
    /// Display name, taken from the source as-is.
    #[serde(rename = "Name")]
    pub name: String,
    /// Base experience points, absent when the cell is empty.
    #[serde(rename = "Base Experience")]
    pub base_experience: Option<i32>,
    /// Height, absent when the cell is empty.
    #[serde(rename = "Height")]
    pub height: Option<i32>,
    /// Weight, absent when the cell is empty.
    #[serde(rename = "Weight")]
    pub weight: Option<i32>,
    /// Raw image URL string, carried through without validation.
    #[serde(rename = "Image URL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_row_deserializes_from_header_names() {
        let mut reader = csv::Reader::from_reader(
            "Name,Base Experience,Height,Weight,Image URL\nBulbasaur,64,7,69,https://img.example/1.png\n"
                .as_bytes(),
        );
        let row: PokemonSeed = reader
            .deserialize()
            .next()
            .expect("one row")
            .expect("row parses");
        assert_eq!(row.name, "Bulbasaur");
        assert_eq!(row.base_experience, Some(64));
        assert_eq!(row.height, Some(7));
        assert_eq!(row.weight, Some(69));
        assert_eq!(row.image_url, "https://img.example/1.png");
    }
}
