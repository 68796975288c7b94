use serde::Serialize;

/// A cell that is numeric when the whole column coerced cleanly and the raw
/// feed string otherwise.
///
/// Coercion is decided per column, not per value: one unparseable entry
/// leaves every value in that column as [`Scalar::Text`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// The raw feed text, straight from the document.
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    pub fn as_text(&self) -> String {
        match self {
            Scalar::Int(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Text(v) => v.clone(),
        }
    }
}

/// Column-wide best-effort numeric coercion.
///
/// If every present value parses as an integer the column becomes `Int`;
/// failing that, if every present value parses as a float it becomes
/// `Float`; otherwise the column is left untouched. Already-coerced cells
/// keep their value.
pub(crate) fn coerce_column<T>(
    rows: &mut [T],
    get: impl Fn(&mut T) -> &mut Option<Scalar>,
) {
    let mut all_int = true;
    let mut all_float = true;
    for row in rows.iter_mut() {
        if let Some(Scalar::Text(s)) = get(row) {
            if s.trim().parse::<i64>().is_err() {
                all_int = false;
            }
            if s.trim().parse::<f64>().is_err() {
                all_float = false;
                break;
            }
        }
    }
    if !all_float {
        return;
    }
    for row in rows.iter_mut() {
        let cell = get(row);
        let parsed = match cell {
            Some(Scalar::Text(s)) if all_int => s.trim().parse::<i64>().ok().map(Scalar::Int),
            Some(Scalar::Text(s)) => s.trim().parse::<f64>().ok().map(Scalar::Float),
            _ => None,
        };
        if let Some(parsed) = parsed {
            *cell = Some(parsed);
        }
    }
}
