use crate::{types::DepartmentID, Error};

use super::common::{push_list, push_optional, Query};

/// Arguments for the `search` endpoint. See <https://metmuseum.github.io/#search>.
///
/// Unset filters are left out of the request entirely, so `Some(false)` and
/// `None` mean different things.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOptions {
    /// Search term, e.g. `sunflowers`. Always sent, even when empty.
    pub q: String,
    /// Restricts results to objects designated as highlights.
    pub is_highlight: Option<bool>,
    /// Restricts results to objects in a department.
    pub department_id: Option<DepartmentID>,
    /// Restricts results to objects currently on view in the museum.
    pub is_on_view: Option<bool>,
    /// Matches `q` against the artist name and culture fields only.
    pub artist_or_culture: Option<bool>,
    /// Restricts results to one or more media or object types, e.g. "Ceramics",
    /// "Paintings". Sent as the `medium` parameter.
    pub media: Vec<String>,
    /// Restricts results to objects with images.
    pub has_images: Option<bool>,
    /// Restricts results to one or more locations, e.g. "France", "Paris".
    pub geo_locations: Vec<String>,
    /// First year of the date range. Requires `date_end`.
    pub date_begin: Option<i64>,
    /// Last year of the date range. Requires `date_begin`.
    pub date_end: Option<i64>,
}

impl Query for SearchOptions {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        push_optional(&mut pairs, "isHighlight", self.is_highlight);
        push_optional(&mut pairs, "departmentId", self.department_id);
        push_optional(&mut pairs, "isOnView", self.is_on_view);
        push_optional(&mut pairs, "artistOrCulture", self.artist_or_culture);
        push_list(&mut pairs, "medium", &self.media);
        push_optional(&mut pairs, "hasImages", self.has_images);
        push_list(&mut pairs, "geoLocations", &self.geo_locations);
        if let (Some(begin), Some(end)) = (self.date_begin, self.date_end) {
            pairs.push(("dateBegin", begin.to_string()));
            pairs.push(("dateEnd", end.to_string()));
        }
        pairs
    }
}

impl SearchOptions {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
            ..Self::default()
        }
    }

    /// Rejects a year range with only one bound set.
    pub fn validate(&self) -> Result<(), Error> {
        match (self.date_begin, self.date_end) {
            (Some(_), None) => Err(Error::InvalidOptions(
                "dateBegin is set, but dateEnd is not".to_string(),
            )),
            (None, Some(_)) => Err(Error::InvalidOptions(
                "dateEnd is set, but dateBegin is not".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub fn with_is_highlight(mut self, is_highlight: bool) -> Self {
        self.is_highlight = Some(is_highlight);
        self
    }

    pub fn with_department_id(mut self, department_id: DepartmentID) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn with_is_on_view(mut self, is_on_view: bool) -> Self {
        self.is_on_view = Some(is_on_view);
        self
    }

    pub fn with_artist_or_culture(mut self, artist_or_culture: bool) -> Self {
        self.artist_or_culture = Some(artist_or_culture);
        self
    }

    pub fn with_medium(mut self, medium: &str) -> Self {
        self.media.push(medium.to_string());
        self
    }
    pub fn with_media(mut self, media: &[String]) -> Self {
        self.media.extend_from_slice(media);
        self
    }

    pub fn with_has_images(mut self, has_images: bool) -> Self {
        self.has_images = Some(has_images);
        self
    }

    pub fn with_geo_location(mut self, geo_location: &str) -> Self {
        self.geo_locations.push(geo_location.to_string());
        self
    }
    pub fn with_geo_locations(mut self, geo_locations: &[String]) -> Self {
        self.geo_locations.extend_from_slice(geo_locations);
        self
    }

    /// Sets both ends of the year range.
    pub fn with_year_range(mut self, date_begin: i64, date_end: i64) -> Self {
        self.date_begin = Some(date_begin);
        self.date_end = Some(date_end);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Query, SearchOptions};

    #[test]
    fn test_search_query() {
        let url = Url::parse("https://example.com/search").unwrap();

        insta::assert_snapshot!(SearchOptions::default().add_to_url(&url).to_string(), @"https://example.com/search?q=");

        insta::assert_snapshot!(SearchOptions::new("quilt")
            .with_is_highlight(true)
            .with_department_id(6)
            .with_is_on_view(false)
            .with_artist_or_culture(true)
            .with_medium("Quilts")
            .with_media(&["Silk".to_string(), "Bedcovers".to_string()])
            .with_has_images(true)
            .with_geo_location("New York")
            .with_year_range(1700, 1800)
            .add_to_url(&url)
            .to_string(), @"https://example.com/search?q=quilt&isHighlight=true&departmentId=6&isOnView=false&artistOrCulture=true&medium=Quilts%7CSilk%7CBedcovers&hasImages=true&geoLocations=New+York&dateBegin=1700&dateEnd=1800");
    }

    #[test]
    fn one_sided_year_range_fails_validation() {
        let begin_only = SearchOptions {
            date_begin: Some(1700),
            ..SearchOptions::new("African")
        };
        assert!(begin_only.validate().is_err());

        let end_only = SearchOptions {
            date_end: Some(1800),
            ..SearchOptions::new("African")
        };
        assert!(end_only.validate().is_err());

        assert!(SearchOptions::new("African")
            .with_year_range(1700, 1800)
            .validate()
            .is_ok());
        assert!(SearchOptions::new("African").validate().is_ok());
    }

    #[test]
    fn one_sided_year_range_is_never_encoded() {
        let options = SearchOptions {
            date_begin: Some(1700),
            ..SearchOptions::default()
        };
        let pairs = options.to_query_pairs();
        assert!(pairs.iter().all(|(key, _)| *key != "dateBegin"));
    }
}
