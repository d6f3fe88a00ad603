//! Primitive-kind inference from cell text.
//!
//! Classification is deliberately naive: it looks at row 0 only and never
//! scans a column for homogeneity. If later rows disagree in shape the
//! generated model is simply wrong for them; reconciliation is a known
//! limitation, not something this module attempts.

use csview_model::{FieldSet, Record};

use crate::types::{InferredModel, InferredProperty, PrimitiveKind};

/// Classify a single cell's text into a primitive kind.
///
/// Priority order: empty/absent → [`PrimitiveKind::Other`], boolean literal
/// → [`PrimitiveKind::Boolean`], numeric literal →
/// [`PrimitiveKind::Integer`], anything else → [`PrimitiveKind::Text`].
pub fn classify_value(value: &str) -> PrimitiveKind {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return PrimitiveKind::Other;
    }
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
        return PrimitiveKind::Boolean;
    }
    if is_numeric_literal(trimmed) {
        return PrimitiveKind::Integer;
    }
    PrimitiveKind::Text
}

/// True for integer and decimal literals, excluding the `inf`/`NaN`
/// spellings that `f64::from_str` would otherwise accept.
fn is_numeric_literal(value: &str) -> bool {
    if value.parse::<i64>().is_ok() {
        return true;
    }
    if !value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
    {
        return false;
    }
    value.parse::<f64>().is_ok()
}

/// Infer a model from the first record of a successful parse.
///
/// One property per field, in [`FieldSet`] order. Callers gate on a
/// non-empty record set; inference is undefined on empty input.
pub fn infer_model(fields: &FieldSet, first: &Record) -> InferredModel {
    let properties = fields
        .iter()
        .map(|name| InferredProperty {
            name: name.to_string(),
            kind: classify_value(first.value(name)),
        })
        .collect();
    let model = InferredModel { properties };
    tracing::debug!(columns = model.properties.len(), "inferred model from row 0");
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_literals() {
        assert_eq!(classify_value("1"), PrimitiveKind::Integer);
        assert_eq!(classify_value("-42"), PrimitiveKind::Integer);
        assert_eq!(classify_value("3.25"), PrimitiveKind::Integer);
        assert_eq!(classify_value("1e6"), PrimitiveKind::Integer);
        assert_eq!(classify_value("true"), PrimitiveKind::Boolean);
        assert_eq!(classify_value("FALSE"), PrimitiveKind::Boolean);
        assert_eq!(classify_value("hello"), PrimitiveKind::Text);
        assert_eq!(classify_value("2021-01-01"), PrimitiveKind::Text);
        assert_eq!(classify_value(""), PrimitiveKind::Other);
        assert_eq!(classify_value("   "), PrimitiveKind::Other);
    }

    #[test]
    fn inf_and_nan_are_text() {
        assert_eq!(classify_value("inf"), PrimitiveKind::Text);
        assert_eq!(classify_value("NaN"), PrimitiveKind::Text);
    }

    #[test]
    fn model_follows_field_order() {
        let fields = FieldSet::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let mut record = Record::new();
        record.insert("a", "1");
        record.insert("b", "true");
        record.insert("c", "x");
        let model = infer_model(&fields, &record);
        let kinds: Vec<(&str, PrimitiveKind)> = model
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("a", PrimitiveKind::Integer),
                ("b", PrimitiveKind::Boolean),
                ("c", PrimitiveKind::Text),
            ]
        );
    }

    #[test]
    fn absent_cell_infers_other() {
        let fields = FieldSet::new(vec!["a".into(), "b".into()]).unwrap();
        let mut record = Record::new();
        record.insert("a", "1");
        let model = infer_model(&fields, &record);
        assert_eq!(model.properties[1].kind, PrimitiveKind::Other);
    }
}
