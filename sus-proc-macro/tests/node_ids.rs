use pretty_assertions::assert_eq;
use sus_proc_macro::{field, kind, kw};
use tree_sitter_sus::{language, new_parser};

#[test]
fn kinds_match_runtime_lookup() {
    let language = language();

    assert_eq!(kind!("source_file"), language.id_for_node_kind("source_file", true));
    assert_eq!(kind!("global_object"), language.id_for_node_kind("global_object", true));
    assert_eq!(kind!("identifier"), language.id_for_node_kind("identifier", true));
    assert_eq!(kind!("binary_op"), language.id_for_node_kind("binary_op", true));
}

#[test]
fn keywords_match_runtime_lookup() {
    let language = language();

    assert_eq!(kw!("module"), language.id_for_node_kind("module", false));
    assert_eq!(kw!("interface"), language.id_for_node_kind("interface", false));
    assert_eq!(kw!("::"), language.id_for_node_kind("::", false));
    assert_ne!(kw!("if"), kw!("when"));
}

#[test]
fn fields_match_runtime_lookup() {
    let language = language();

    for (id, name) in [
        (field!("name"), "name"),
        (field!("block"), "block"),
        (field!("item"), "item"),
        (field!("then_block"), "then_block"),
    ] {
        assert_eq!(
            Some(u16::from(id)),
            language.field_id_for_name(name).map(u16::from)
        );
        assert_eq!(language.field_name_for_id(u16::from(id)), Some(name));
    }
}

#[test]
fn kinds_work_as_match_patterns() {
    let source = "module counter {\n    if start {\n        state int count = 0\n    }\n}\n";
    let tree = new_parser().unwrap().parse(source, None).unwrap();

    let object = tree.root_node().named_child(0).unwrap();
    let block = object.child_by_field_id(field!("block").get()).unwrap();
    let statement = block.named_child(0).unwrap();

    let described = match statement.kind_id() {
        kind!("if_statement") => "if",
        kind!("for_statement") => "for",
        kind!("decl_assign_statement") => "assignment",
        _ => "other",
    };
    assert_eq!(described, "if");

    let keyword = object.child_by_field_id(field!("object_type").get()).unwrap();
    assert_eq!(keyword.kind_id(), kw!("module"));
}
