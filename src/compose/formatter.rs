//! Prints a `ConfigModule` as a CommonJS configuration file

use crate::compose::module::{ConfigModule, DirectoryMap, MarkdownUse, SetupStatement, Statement};
use crate::constants::{CONFIG_PARAM, MARKDOWN_LIBRARY_BINDING};

const MARKDOWN_LIBRARY_VAR: &str = "mdLib";
const MARKDOWN_LIBRARY_OPTIONS: [&str; 3] = ["html: true", "breaks: true", "linkify: true"];

/// Serializes module statements to source text.
#[derive(Debug, Clone)]
pub struct ModuleFormatter {
    indent: String,
}

impl Default for ModuleFormatter {
    fn default() -> Self {
        Self::with_indent(4)
    }
}

impl ModuleFormatter {
    pub fn with_indent(width: usize) -> Self {
        Self { indent: " ".repeat(width) }
    }

    pub fn format(&self, module: &ConfigModule) -> String {
        let mut imports = Vec::new();
        let mut body = Vec::new();

        for statement in &module.statements {
            match statement {
                Statement::Import(line) => imports.push(line.clone()),
                // Interior lines may sit inside template literals and stay as written.
                Statement::Setup(SetupStatement::Fragment { body: fragment, .. }) => {
                    body.push(format!("{}{fragment}", self.indent))
                }
                Statement::Setup(setup) => body.push(self.indented(&self.setup(setup), 1)),
                Statement::PassthroughCopy(path) => body.push(self.indented(
                    &format!("{CONFIG_PARAM}.addPassthroughCopy({});", js_string(path)),
                    1,
                )),
                Statement::ReturnDirectories(directories) => {
                    body.push(self.indented(&self.return_directories(directories), 1))
                }
            }
        }

        let mut out = String::new();
        if !imports.is_empty() {
            out.push_str(&imports.join("\n"));
            out.push_str("\n\n");
        }
        out.push_str(&format!("module.exports = function ({CONFIG_PARAM}) {{\n"));
        out.push_str(&body.join("\n\n"));
        if !body.is_empty() {
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }

    fn setup(&self, statement: &SetupStatement) -> String {
        match statement {
            SetupStatement::Fragment { body, .. } => body.clone(),
            SetupStatement::RegisterPlugin { binding, options } => match options {
                Some(options) => format!("{CONFIG_PARAM}.addPlugin({binding}, {{ {options} }});"),
                None => format!("{CONFIG_PARAM}.addPlugin({binding});"),
            },
            SetupStatement::MarkdownLibrary { uses } => self.markdown_library(uses),
        }
    }

    fn markdown_library(&self, uses: &[MarkdownUse]) -> String {
        let mut lines = vec![format!(
            "const {MARKDOWN_LIBRARY_VAR} = {MARKDOWN_LIBRARY_BINDING}({{"
        )];
        for option in MARKDOWN_LIBRARY_OPTIONS {
            lines.push(format!("{}{option},", self.indent));
        }
        lines.push("})".to_string());

        for markdown_use in uses {
            let call = match &markdown_use.options {
                Some(options) => format!(".use({}, {{ {options} }})", markdown_use.binding),
                None => format!(".use({})", markdown_use.binding),
            };
            lines.push(format!("{}{call}", self.indent));
        }
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }

        lines.push(format!("{CONFIG_PARAM}.setLibrary(\"md\", {MARKDOWN_LIBRARY_VAR});"));
        lines.join("\n")
    }

    fn return_directories(&self, directories: &DirectoryMap) -> String {
        let inner = self.indent.repeat(2);
        let entries = [
            ("input", &directories.input),
            ("output", &directories.output),
            ("data", &directories.data),
            ("includes", &directories.includes),
        ];
        let mut lines = vec!["return {".to_string(), format!("{}dir: {{", self.indent)];
        for (key, value) in entries {
            lines.push(format!("{inner}{key}: {},", js_string(value)));
        }
        lines.push(format!("{}}},", self.indent));
        lines.push("};".to_string());
        lines.join("\n")
    }

    fn indented(&self, block: &str, depth: usize) -> String {
        let prefix = self.indent.repeat(depth);
        block
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    String::new()
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Double-quoted JS string literal; JSON escaping is valid JS.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
