//! Object record types: the full object plus its nested constituents,
//! measurements and tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{nullable, ObjectID};

/// Full record for one object, returned by the `objects/<id>` endpoint.
/// See <https://metmuseum.github.io/#object>.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectResult {
    /// Identifying number for each artwork (unique, usable as a key).
    #[serde(rename = "objectID", deserialize_with = "nullable")]
    pub object_id: ObjectID,

    /// Marks a popular and important artwork in the collection.
    #[serde(deserialize_with = "nullable")]
    pub is_highlight: bool,

    /// Identifying number for each artwork (not always unique).
    #[serde(deserialize_with = "nullable")]
    pub accession_number: String,

    /// Year the artwork was acquired.
    #[serde(deserialize_with = "nullable")]
    pub accession_year: String,

    /// Marks an artwork in the public domain.
    #[serde(deserialize_with = "nullable")]
    pub is_public_domain: bool,

    /// URL of the primary image, in JPEG format.
    #[serde(deserialize_with = "nullable")]
    pub primary_image: String,

    /// URL of a lower-resolution primary image, in JPEG format.
    #[serde(deserialize_with = "nullable")]
    pub primary_image_small: String,

    /// URLs of additional images, in JPEG format.
    #[serde(deserialize_with = "nullable")]
    pub additional_images: Vec<String>,

    /// People and organisations associated with the object.
    #[serde(deserialize_with = "nullable")]
    pub constituents: Vec<Constituent>,

    /// Name (not ID) of the curatorial department responsible for the object.
    #[serde(deserialize_with = "nullable")]
    pub department: String,

    /// Physical type of the object.
    #[serde(deserialize_with = "nullable")]
    pub object_name: String,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub culture: String,

    #[serde(deserialize_with = "nullable")]
    pub period: String,

    #[serde(deserialize_with = "nullable")]
    pub dynasty: String,

    #[serde(deserialize_with = "nullable")]
    pub reign: String,

    /// Set of works created as a group or published as a series.
    #[serde(deserialize_with = "nullable")]
    pub portfolio: String,

    #[serde(deserialize_with = "nullable")]
    pub artist_role: String,

    /// Attribution qualifier for `artist_role`.
    #[serde(deserialize_with = "nullable")]
    pub artist_prefix: String,

    #[serde(deserialize_with = "nullable")]
    pub artist_display_name: String,

    /// Nationality and life dates of the artist.
    #[serde(deserialize_with = "nullable")]
    pub artist_display_bio: String,

    #[serde(deserialize_with = "nullable")]
    pub artist_suffix: String,

    /// Name used for sorting, e.g. `Gogh, Vincent van`.
    #[serde(deserialize_with = "nullable")]
    pub artist_alpha_sort: String,

    #[serde(deserialize_with = "nullable")]
    pub artist_nationality: String,

    /// Year the artist was born.
    #[serde(deserialize_with = "nullable")]
    pub artist_begin_date: String,

    /// Year the artist died.
    #[serde(deserialize_with = "nullable")]
    pub artist_end_date: String,

    #[serde(deserialize_with = "nullable")]
    pub artist_gender: String,

    #[serde(rename = "artistWikidata_URL", deserialize_with = "nullable")]
    pub artist_wikidata_url: String,

    /// Union List of Artist Names URL.
    #[serde(rename = "artistULAN_URL", deserialize_with = "nullable")]
    pub artist_ulan_url: String,

    /// Year, span of years, or phrase describing when the object was made.
    #[serde(deserialize_with = "nullable")]
    pub object_date: String,

    #[serde(deserialize_with = "nullable")]
    pub object_begin_date: i64,

    #[serde(deserialize_with = "nullable")]
    pub object_end_date: i64,

    /// Materials used to create the object.
    #[serde(deserialize_with = "nullable")]
    pub medium: String,

    #[serde(deserialize_with = "nullable")]
    pub dimensions: String,

    #[serde(deserialize_with = "nullable")]
    pub measurements: Vec<Measurement>,

    #[serde(deserialize_with = "nullable")]
    pub credit_line: String,

    #[serde(deserialize_with = "nullable")]
    pub geography_type: String,

    #[serde(deserialize_with = "nullable")]
    pub city: String,

    #[serde(deserialize_with = "nullable")]
    pub state: String,

    #[serde(deserialize_with = "nullable")]
    pub county: String,

    #[serde(deserialize_with = "nullable")]
    pub country: String,

    #[serde(deserialize_with = "nullable")]
    pub region: String,

    #[serde(deserialize_with = "nullable")]
    pub subregion: String,

    #[serde(deserialize_with = "nullable")]
    pub locale: String,

    #[serde(deserialize_with = "nullable")]
    pub locus: String,

    #[serde(deserialize_with = "nullable")]
    pub excavation: String,

    #[serde(deserialize_with = "nullable")]
    pub river: String,

    #[serde(deserialize_with = "nullable")]
    pub classification: String,

    /// Credit line for artworks still under copyright.
    #[serde(deserialize_with = "nullable")]
    pub rights_and_reproduction: String,

    /// URL of the object's page on metmuseum.org.
    #[serde(deserialize_with = "nullable")]
    pub link_resource: String,

    /// Timestamp of the last metadata update.
    #[serde(deserialize_with = "nullable")]
    pub metadata_date: String,

    #[serde(deserialize_with = "nullable")]
    pub repository: String,

    #[serde(rename = "objectURL", deserialize_with = "nullable")]
    pub object_url: String,

    /// Subject keywords.
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,

    #[serde(rename = "objectWikidata_URL", deserialize_with = "nullable")]
    pub object_wikidata_url: String,

    /// Whether the object appears on the Timeline of Art History.
    #[serde(deserialize_with = "nullable")]
    pub is_timeline_work: bool,

    #[serde(rename = "GalleryNumber", deserialize_with = "nullable")]
    pub gallery_number: String,
}

/// A person or organisation associated with an object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Constituent {
    #[serde(rename = "constituentID", deserialize_with = "nullable")]
    pub constituent_id: i64,

    /// Relationship to the object, e.g. `Artist`.
    #[serde(deserialize_with = "nullable")]
    pub role: String,

    #[serde(deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "constituentULAN_URL", deserialize_with = "nullable")]
    pub ulan_url: String,

    #[serde(rename = "constituentWikidata_URL", deserialize_with = "nullable")]
    pub wikidata_url: String,

    #[serde(deserialize_with = "nullable")]
    pub gender: String,
}

/// Measurements of one element of an object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    /// Short name of the measured element, e.g. `Overall`.
    #[serde(deserialize_with = "nullable")]
    pub element_name: String,

    #[serde(deserialize_with = "nullable")]
    pub element_description: String,

    /// Attribute name to measure. Lengths are in centimetres, weights in kilograms.
    #[serde(deserialize_with = "nullable")]
    pub element_measurements: BTreeMap<String, f64>,
}

/// Subject keyword attached to an object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "nullable")]
    pub term: String,

    /// Getty Art & Architecture Thesaurus entry for `term`.
    #[serde(rename = "AAT_URL", deserialize_with = "nullable")]
    pub aat_url: String,

    #[serde(rename = "Wikidata_URL", deserialize_with = "nullable")]
    pub wikidata_url: String,
}
