// Compiles the RON data tables under `data/` into static lookup maps so the
// runtime never parses them.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let catalysts_path = Path::new("data/variant_catalysts.ron");
    println!("cargo:rerun-if-changed={}", catalysts_path.display());

    let source = fs::read_to_string(catalysts_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", catalysts_path.display(), e));
    let catalysts: BTreeMap<String, String> = ron::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", catalysts_path.display(), e));

    let mut map = phf_codegen::Map::new();
    for (form, item) in &catalysts {
        map.entry(form.as_str(), &format!("{:?}", item));
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("generated_data.rs");
    let mut file = fs::File::create(&dest_path).expect("Failed to create generated_data.rs");

    writeln!(
        file,
        "/// Variant form identifier -> catalyst item display name.\n\
         pub static VARIANT_CATALYSTS: phf::Map<&'static str, &'static str> = {};",
        map.build()
    )
    .expect("Failed to write generated_data.rs");
}
