fn main() -> Result<(), Box<dyn std::error::Error>> {
    // No system protoc needed; the vendored binary also ships the well-known types.
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    let include = protoc_bin_vendored::include_path()?;

    let optional_timestamp = "#[serde(skip_serializing_if = \"Option::is_none\", \
        serialize_with = \"crate::convert::json::optional_timestamp\")]";

    prost_build::Config::new()
        .type_attribute(".Foo.User.Stamps", "#[derive(serde::Serialize)]")
        .type_attribute(".Foo.User.Stamps", "#[serde(rename_all = \"camelCase\")]")
        .field_attribute(".Foo.User.Stamps.created_at", optional_timestamp)
        .field_attribute(".Foo.User.Stamps.updated_at", optional_timestamp)
        .field_attribute(
            ".Foo.User.Stamps.logins",
            "#[serde(skip_serializing_if = \"Vec::is_empty\", \
             serialize_with = \"crate::convert::json::timestamps\")]",
        )
        .compile_protos(&["proto/foo.proto"], &[std::path::Path::new("proto"), include.as_path()])?;

    println!("cargo:rerun-if-changed=proto/foo.proto");
    Ok(())
}
