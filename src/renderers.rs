//! Rendering of test classes to PHP source text

use crate::core::errors::Result;
use crate::core::traits::{Aware, Renderer};
use crate::models::{TestClass, TestMethod, TestProperty};

const INDENT: &str = "    ";

/// Default renderer producing one PHP file per test class
#[derive(Debug, Default)]
pub struct BasicRenderer;

impl Aware for BasicRenderer {}

impl Renderer for BasicRenderer {
    fn render(&self, class: &TestClass) -> Result<String> {
        let mut out = String::new();
        out.push_str("<?php\n\ndeclare(strict_types=1);\n");

        if let Some(namespace) = class.namespace() {
            out.push_str(&format!("\nnamespace {namespace};\n"));
        }

        let mut imports = class.imports().to_vec();
        imports.sort_by(|a, b| a.name().cmp(b.name()));
        if !imports.is_empty() {
            out.push('\n');
            for import in &imports {
                match import.alias() {
                    Some(alias) => {
                        out.push_str(&format!("use {} as {};\n", import.name(), alias))
                    }
                    None => out.push_str(&format!("use {};\n", import.name())),
                }
            }
        }

        out.push('\n');
        render_documentation(&mut out, class.documentation(), "");
        match class.base_class() {
            Some(base) => {
                out.push_str(&format!("class {} extends {}\n", class.short_name(), base))
            }
            None => out.push_str(&format!("class {}\n", class.short_name())),
        }
        out.push_str("{\n");

        let mut first = true;
        for property in class.properties() {
            if !first {
                out.push('\n');
            }
            first = false;
            render_property(&mut out, property);
        }
        for method in class.methods() {
            if !first {
                out.push('\n');
            }
            first = false;
            render_method(&mut out, method);
        }

        out.push_str("}\n");
        Ok(out)
    }
}

fn render_documentation(out: &mut String, lines: &[String], indent: &str) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("{indent}/**\n"));
    for line in lines {
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
}

fn render_property(out: &mut String, property: &TestProperty) {
    render_documentation(out, property.documentation(), INDENT);
    match property.type_hint() {
        Some(hint) => out.push_str(&format!("{INDENT}protected {hint} ${};\n", property.name())),
        None => out.push_str(&format!("{INDENT}protected ${};\n", property.name())),
    }
}

fn render_method(out: &mut String, method: &TestMethod) {
    render_documentation(out, method.documentation(), INDENT);
    let keyword = method.visibility().keyword();
    match method.return_type() {
        Some(return_type) => out.push_str(&format!(
            "{INDENT}{keyword} function {}(): {return_type}\n",
            method.name()
        )),
        None => out.push_str(&format!("{INDENT}{keyword} function {}()\n", method.name())),
    }
    out.push_str(&format!("{INDENT}{{\n"));
    for statement in method.statements() {
        for line in statement.as_str().lines() {
            out.push_str(&format!("{INDENT}{INDENT}{line}\n"));
        }
    }
    out.push_str(&format!("{INDENT}}}\n"));
}
