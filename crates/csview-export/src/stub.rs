//! C# model-stub generation from an inferred model.

use csview_transform::{InferredModel, PrimitiveKind};

/// Class name emitted for every stub.
pub const STUB_CLASS_NAME: &str = "CsvModel";

fn type_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Integer => "int",
        PrimitiveKind::Text => "string",
        PrimitiveKind::Boolean => "bool",
        PrimitiveKind::Other => "object",
    }
}

/// Emit a C# class with one auto-property per inferred column, in field
/// order. Property names are taken verbatim from the header row, so they are
/// only as valid as the input's column names.
pub fn generate_model_stub(model: &InferredModel) -> String {
    let mut stub = format!("public class {STUB_CLASS_NAME}\n{{\n");
    for property in &model.properties {
        stub.push_str(&format!(
            "   public {} {} {{ get; set; }}\n",
            type_name(property.kind),
            property.name
        ));
    }
    stub.push('}');
    stub
}
