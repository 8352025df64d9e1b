use metmuseum_api::types::{Department, ObjectResult, ObjectsResult};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ObjectIdRow {
    #[tabled(rename = "Object ID")]
    object_id: i64,
}

#[derive(Tabled)]
struct DepartmentRow {
    #[tabled(rename = "ID")]
    department_id: i64,
    #[tabled(rename = "Name")]
    display_name: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_object_id_rows(result: &ObjectsResult, limit: usize) -> Vec<ObjectIdRow> {
    result
        .object_ids
        .iter()
        .take(limit)
        .map(|&object_id| ObjectIdRow { object_id })
        .collect()
}

fn build_department_rows(departments: &[Department]) -> Vec<DepartmentRow> {
    departments
        .iter()
        .map(|d| DepartmentRow {
            department_id: d.department_id,
            display_name: d.display_name.clone(),
        })
        .collect()
}

fn build_object_rows(object: &ObjectResult) -> Vec<FieldRow> {
    let artists = object
        .constituents
        .iter()
        .map(|c| match c.role.as_str() {
            "" => c.name.clone(),
            role => format!("{} ({})", c.name, role),
        })
        .collect::<Vec<_>>()
        .join("; ");
    let tags = object
        .tags
        .iter()
        .map(|t| t.term.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let rows = [
        ("Object ID", object.object_id.to_string()),
        ("Title", object.title.clone()),
        ("Artist", object.artist_display_name.clone()),
        ("Constituents", artists),
        ("Date", object.object_date.clone()),
        ("Medium", object.medium.clone()),
        ("Dimensions", object.dimensions.clone()),
        ("Department", object.department.clone()),
        ("Classification", object.classification.clone()),
        ("Culture", object.culture.clone()),
        ("Credit Line", object.credit_line.clone()),
        ("Highlight", object.is_highlight.to_string()),
        ("Public Domain", object.is_public_domain.to_string()),
        ("Gallery", object.gallery_number.clone()),
        ("Tags", tags),
        ("Image", object.primary_image.clone()),
        ("URL", object.object_url.clone()),
    ];
    rows.into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| FieldRow { field, value })
        .collect()
}

// -- Table output --

pub fn print_object_ids_table(result: &ObjectsResult, limit: usize) {
    println!("{}", Table::new(build_object_id_rows(result, limit)));
    println!("{}", listing_summary(result, limit));
}

pub fn print_departments_table(departments: &[Department]) {
    println!("{}", Table::new(build_department_rows(departments)));
}

pub fn print_object_table(object: &ObjectResult) {
    println!("{}", Table::new(build_object_rows(object)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn listing_summary(result: &ObjectsResult, limit: usize) -> String {
    let shown = result.object_ids.len().min(limit);
    if shown < result.object_ids.len() {
        format!("Showing {} of {} objects", shown, result.total)
    } else {
        format!("{} objects", result.total)
    }
}
