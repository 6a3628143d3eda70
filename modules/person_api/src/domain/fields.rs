//! Response shaping for the `fields` query parameter.
//!
//! The requested names are resolved once against a typed field set; unknown
//! names are dropped there. The selection is then applied to serialized rows,
//! a single object or an array of objects alike.

use serde_json::{Map, Value};

/// A closed set of projectable field names for one record type.
pub trait FieldName: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    /// Name of the field as it appears in the serialized record.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Parsed `fields` parameter. `None` means "no projection requested".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection<F> {
    fields: Option<Vec<F>>,
}

impl<F: FieldName> Default for FieldSelection<F> {
    fn default() -> Self {
        Self::all()
    }
}

impl<F: FieldName> FieldSelection<F> {
    /// Identity selection.
    pub fn all() -> Self {
        Self { fields: None }
    }

    /// Parse a comma-separated list. Blank segments are ignored; if nothing
    /// remains the selection is the identity. Names that are present but not
    /// part of `F` are dropped, which may leave an empty projection.
    pub fn parse(raw: Option<&str>) -> Self {
        let names: Vec<&str> = raw
            .into_iter()
            .flat_map(|r| r.split(','))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Self::all();
        }

        let mut fields = Vec::with_capacity(names.len());
        for field in names.into_iter().filter_map(F::from_name) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Self {
            fields: Some(fields),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.fields.is_none()
    }

    pub fn fields(&self) -> Option<&[F]> {
        self.fields.as_deref()
    }

    /// Narrow a serialized record, or every record of an array.
    /// Values that are not objects pass through untouched.
    pub fn apply(&self, value: Value) -> Value {
        let Some(fields) = &self.fields else {
            return value;
        };
        match value {
            Value::Object(row) => Value::Object(narrow(row, fields)),
            Value::Array(rows) => Value::Array(rows.into_iter().map(|r| self.apply(r)).collect()),
            other => other,
        }
    }
}

fn narrow<F: FieldName>(mut row: Map<String, Value>, fields: &[F]) -> Map<String, Value> {
    fields
        .iter()
        .filter_map(|f| row.remove(f.name()).map(|v| (f.name().to_owned(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        Age,
        Email,
    }

    impl FieldName for Field {
        const ALL: &'static [Self] = &[Field::Name, Field::Age, Field::Email];

        fn name(self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Age => "age",
                Field::Email => "email",
            }
        }
    }

    fn john() -> Value {
        json!({"name": "John Doe", "age": 30, "email": "john.doe@example.com"})
    }

    #[test]
    fn filters_fields_of_an_object() {
        let sel = FieldSelection::<Field>::parse(Some("name,age"));
        assert_eq!(sel.apply(john()), json!({"name": "John Doe", "age": 30}));
    }

    #[test]
    fn filters_fields_of_each_object_in_an_array() {
        let rows = json!([
            {"name": "John Doe", "age": 30, "email": "john.doe@example.com"},
            {"name": "Jane Doe", "age": 25, "email": "jane.doe@example.com"}
        ]);
        let sel = FieldSelection::<Field>::parse(Some("name,age"));
        assert_eq!(
            sel.apply(rows),
            json!([{"name": "John Doe", "age": 30}, {"name": "Jane Doe", "age": 25}])
        );
    }

    #[test]
    fn empty_array_stays_empty() {
        let sel = FieldSelection::<Field>::parse(Some("name,age"));
        assert_eq!(sel.apply(json!([])), json!([]));
    }

    #[test]
    fn empty_object_stays_empty() {
        let sel = FieldSelection::<Field>::parse(Some("name,age"));
        assert_eq!(sel.apply(json!({})), json!({}));
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let sel = FieldSelection::<Field>::parse(Some("wrong_field,age"));
        assert_eq!(sel.fields(), Some(&[Field::Age][..]));
        assert_eq!(sel.apply(john()), json!({"age": 30}));

        let only_unknown = FieldSelection::<Field>::parse(Some("nope"));
        assert!(!only_unknown.is_identity());
        assert_eq!(only_unknown.apply(john()), json!({}));
    }

    #[test]
    fn absent_or_blank_list_is_identity() {
        for raw in [None, Some(""), Some(" , ,")] {
            let sel = FieldSelection::<Field>::parse(raw);
            assert!(sel.is_identity(), "raw={raw:?}");
            assert_eq!(sel.apply(john()), john());
        }
    }

    #[test]
    fn names_are_trimmed_and_deduplicated() {
        let sel = FieldSelection::<Field>::parse(Some(" email , email,name"));
        assert_eq!(sel.fields(), Some(&[Field::Email, Field::Name][..]));
    }

    #[test]
    fn projection_is_idempotent() {
        let sel = FieldSelection::<Field>::parse(Some("email,name"));
        let once = sel.apply(john());
        let twice = sel.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn scalars_pass_through() {
        let sel = FieldSelection::<Field>::parse(Some("name"));
        assert_eq!(sel.apply(json!("text")), json!("text"));
        assert_eq!(sel.apply(Value::Null), Value::Null);
    }
}
