//! Java source emission for a planned synthesis.
//!
//! [`render`] produces the plain source text; [`escape`] turns it into the
//! all-ASCII form that is actually written to disk.

mod escape;

use std::fmt::Write as _;

pub use escape::{escape, unescape, UnicodeEscaper};

use crate::defaults::DefaultValue;
use crate::model::{Modifiers, TargetType, TypeRef};
use crate::obligation::{ConstructorObligation, MemberObligation};
use crate::synthesis::Synthesis;

const INDENT: &str = "    ";

/// Renders the complete source unit: package clause, type header,
/// forwarding constructors, method stubs and the closing brace, in that order.
#[must_use]
pub fn render(synthesis: &Synthesis) -> String {
    let mut out = String::new();
    write_package(&mut out, &synthesis.target);
    write_header(&mut out, synthesis);
    for ctor in &synthesis.constructors {
        write_constructor(&mut out, synthesis, ctor);
    }
    for member in &synthesis.members {
        write_method(&mut out, member);
    }
    out.push_str("}\n");
    out
}

/// Modifier keywords followed by a space, or nothing.
fn modifier_prefix(modifiers: Modifiers) -> String {
    let emitted = modifiers.emittable();
    if emitted.is_empty() {
        String::new()
    } else {
        format!("{emitted} ")
    }
}

/// The target's name relative to its package, as written in source.
fn relative_name(target: &TargetType) -> String {
    let name = match target.package() {
        Some(package) => &target.qualified_name[package.len() + 1..],
        None => target.qualified_name.as_str(),
    };
    name.replace('$', ".")
}

/// `(T0 var0, T1 var1, ...)`
#[must_use]
pub fn parameter_list(params: &[TypeRef]) -> String {
    let params: Vec<String> =
        params.iter().enumerate().map(|(i, ty)| format!("{ty} var{i}")).collect();
    format!("({})", params.join(", "))
}

/// ` throws A, B`, or nothing for an empty list.
#[must_use]
pub fn throws_clause(throws: &[TypeRef]) -> String {
    if throws.is_empty() {
        return String::new();
    }
    let names: Vec<String> = throws.iter().map(TypeRef::source_name).collect();
    format!(" throws {}", names.join(", "))
}

fn write_package(out: &mut String, target: &TargetType) {
    if let Some(package) = target.package() {
        let _ = writeln!(out, "package {package};\n");
    }
}

fn write_header(out: &mut String, synthesis: &Synthesis) {
    let target = &synthesis.target;
    let relation = if target.is_interface() { "implements" } else { "extends" };
    let _ = writeln!(
        out,
        "{}class {} {relation} {} {{",
        modifier_prefix(target.modifiers),
        synthesis.generated_name,
        relative_name(target),
    );
}

fn write_constructor(out: &mut String, synthesis: &Synthesis, ctor: &ConstructorObligation) {
    let arguments: Vec<String> = (0..ctor.params.len()).map(|i| format!("var{i}")).collect();
    let _ = write!(
        out,
        "\n{INDENT}{}{}{}{} {{\n{INDENT}{INDENT}super({});\n{INDENT}}}\n",
        modifier_prefix(synthesis.target.modifiers),
        synthesis.generated_name,
        parameter_list(&ctor.params),
        throws_clause(&ctor.throws),
        arguments.join(", "),
    );
}

fn write_method(out: &mut String, member: &MemberObligation) {
    let _ = write!(
        out,
        "\n{INDENT}{}{} {}{} {{\n{INDENT}{INDENT}{}\n{INDENT}}}\n",
        modifier_prefix(member.modifiers),
        member.returns,
        member.name,
        parameter_list(&member.params),
        DefaultValue::for_type(&member.returns),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeShape;
    use crate::obligation::ObligationSet;

    fn member(modifiers: Modifiers, returns: &str, name: &str, params: &[&str]) -> MemberObligation {
        MemberObligation {
            name: name.to_string(),
            params: params.iter().map(|p| p.parse().unwrap()).collect(),
            returns: returns.parse().unwrap(),
            throws: vec![TypeRef::named("java.io.IOException")],
            modifiers,
        }
    }

    fn synthesis(target: TargetType, constructors: Vec<ConstructorObligation>) -> Synthesis {
        let generated_name = format!("{}Impl", target.simple_name());
        Synthesis { target, generated_name, constructors, members: ObligationSet::new() }
    }

    #[test]
    fn renders_interface_implementation() {
        let target = TargetType::new(
            "com.example.Sized",
            TypeShape::Interface,
            Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::INTERFACE,
        );
        let mut s = synthesis(target, Vec::new());
        let abstract_public = Modifiers::PUBLIC | Modifiers::ABSTRACT;
        s.members.insert(member(abstract_public, "int", "size", &[]));
        s.members.insert(member(abstract_public, "void", "clear", &[]));

        assert_eq!(
            render(&s),
            "package com.example;\n\
             \n\
             public class SizedImpl implements Sized {\n\
             \n    public int size() {\n        return 0;\n    }\n\
             \n    public void clear() {\n        return;\n    }\n\
             }\n"
        );
    }

    #[test]
    fn renders_forwarding_constructors() {
        let target = TargetType::new("Shape", TypeShape::Class, Modifiers::ABSTRACT);
        let ctor = ConstructorObligation {
            params: vec!["int".parse().unwrap(), "java.lang.String[]".parse().unwrap()],
            throws: vec![TypeRef::named("java.io.IOException"), TypeRef::named("a.Oops")],
            modifiers: Modifiers::PROTECTED,
        };
        let source = render(&synthesis(target, vec![ctor]));

        assert!(source.starts_with("class ShapeImpl extends Shape {\n"));
        assert!(source.contains(
            "    ShapeImpl(int var0, java.lang.String[] var1) throws java.io.IOException, a.Oops {\n        super(var0, var1);\n    }\n"
        ));
    }

    #[test]
    fn method_stubs_drop_abstract_and_varargs_and_throws() {
        let target = TargetType::new("a.Base", TypeShape::Class, Modifiers::PUBLIC | Modifiers::ABSTRACT);
        let mut s = synthesis(target, Vec::new());
        s.members.insert(member(
            Modifiers::PROTECTED | Modifiers::ABSTRACT | Modifiers::VARARGS,
            "java.util.Map$Entry",
            "pick",
            &["java.lang.Object..."],
        ));
        let source = render(&s);
        assert!(source.contains(
            "    protected java.util.Map.Entry pick(java.lang.Object[] var0) {\n        return null;\n    }\n"
        ));
    }

    #[test]
    fn nested_targets_are_referenced_through_their_outer_type() {
        let target = TargetType::new(
            "a.Outer$Inner",
            TypeShape::Interface,
            Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::INTERFACE,
        );
        let source = render(&synthesis(target, Vec::new()));
        assert!(source.contains("public class InnerImpl implements Outer.Inner {"));
    }

    #[test]
    fn helpers_format_lists() {
        assert_eq!(parameter_list(&[]), "()");
        assert_eq!(throws_clause(&[]), "");
        assert_eq!(
            parameter_list(&["boolean".parse().unwrap(), "char".parse().unwrap()]),
            "(boolean var0, char var1)"
        );
    }
}
