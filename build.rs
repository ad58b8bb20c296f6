use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/strains.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    // Validate structure
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    assert!(
        catalog.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Missing 'version' field\n\
         The catalog must have a top-level 'version' string.\n"
    );

    let strains = catalog.get("strains").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'strains' field\n\
             The catalog must have a top-level 'strains' array.\n"
        );
    });

    let strains = strains.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'strains' must be an array\n\
             Got: {strains}\n"
        );
    });

    let total_aliases = validate_strains(strains);

    println!(
        "cargo:warning=Validated catalog: {} strains, {total_aliases} total aliases",
        strains.len()
    );
}

fn validate_strains(strains: &[serde_json::Value]) -> usize {
    let mut seen_names = std::collections::HashSet::new();
    let mut seen_alias_keys = std::collections::HashSet::new();
    let mut total_aliases = 0;

    for (i, strain) in strains.iter().enumerate() {
        let name = strain.get("name").and_then(|v| v.as_str());
        assert!(
            name.is_some(),
            "\n\nCATALOG BUILD ERROR: Strain at index {i} missing 'name' field\n"
        );
        let name = name.unwrap();

        assert!(
            !name.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Strain at index {i} has an empty 'name'\n"
        );

        // Canonical names are a set, unique by exact string equality
        assert!(
            seen_names.insert(name),
            "\n\nCATALOG BUILD ERROR: Duplicate strain name '{name}' (index {i})\n\
             Canonical names must be unique.\n"
        );

        total_aliases += validate_strain_aliases(strain, name, &mut seen_alias_keys);
    }

    total_aliases
}

fn validate_strain_aliases(
    strain: &serde_json::Value,
    name: &str,
    seen_alias_keys: &mut std::collections::HashSet<String>,
) -> usize {
    let Some(aliases) = strain.get("aliases") else {
        return 0;
    };

    let aliases = aliases.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Strain '{name}': 'aliases' must be an array\n\
             Got: {aliases}\n"
        );
    });

    for (j, alias) in aliases.iter().enumerate() {
        let alias = alias.as_str().unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Strain '{name}' alias {j} must be a string\n\
                 Got: {alias}\n"
            );
        });

        // Same normalization the catalog applies at load time
        let key: String = alias
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        assert!(
            !key.is_empty(),
            "\n\nCATALOG BUILD ERROR: Strain '{name}' alias '{alias}' normalizes to empty\n"
        );

        assert!(
            seen_alias_keys.insert(key),
            "\n\nCATALOG BUILD ERROR: Strain '{name}' alias '{alias}' collides with an earlier alias\n\
             Normalized alias keys must be unique across the catalog.\n"
        );
    }

    aliases.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/strains.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
