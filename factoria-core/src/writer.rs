use std::io::{self, Write};

use crate::element::{Element, Modifier};
use crate::filer::Filer;

/// The annotation used to tag generated classes with their generator.
pub const GENERATED_ANNOTATION: &str = "javax.annotation.Generated";

const INDENT: &str = "    ";

/// Writes Java source text, one declaration at a time.
///
/// Every `write_*` method returns the writer so calls can be chained with `?`.
/// The underlying file is released when the writer is dropped, whether or not
/// writing succeeded; use [`SourceFileWriter::close`] to observe flush errors.
pub struct SourceFileWriter<'a> {
    out: Box<dyn Write + 'a>,
    depth: usize,
    parameters: usize,
    annotated: bool,
    body_empty: bool,
}

impl<'a> SourceFileWriter<'a> {
    /// Wraps an already opened sink.
    pub fn new(out: Box<dyn Write + 'a>) -> Self {
        Self {
            out,
            depth: 0,
            parameters: 0,
            annotated: false,
            body_empty: true,
        }
    }

    /// Opens a new source file for the type `name` through the given filer.
    pub fn create(filer: &'a mut dyn Filer, name: &str, originating: &[&Element]) -> io::Result<Self> {
        let out = filer.create_source_file(name, originating)?;
        Ok(Self::new(out))
    }

    /// Writes `package <name>;`, or nothing for the unnamed package.
    pub fn write_package_declaration(&mut self, package: &str) -> io::Result<&mut Self> {
        if !package.is_empty() {
            self.write_line(&format!("package {package};"))?;
            self.write_line("")?;
        }
        Ok(self)
    }

    /// Writes the annotation on its own line if `condition` holds.
    ///
    /// Inside a class body the annotation opens the blank-line separated
    /// block of the declaration that follows it.
    pub fn write_annotation_if(&mut self, annotation: &str, condition: bool) -> io::Result<&mut Self> {
        if condition {
            if self.depth > 0 && !self.annotated && !self.body_empty {
                self.out.write_all(b"\n")?;
            }
            self.write_line(annotation)?;
            self.annotated = true;
            self.body_empty = false;
        }
        Ok(self)
    }

    /// Opens a class declaration tagged as generated by `generator`.
    pub fn write_class_declaration(
        &mut self,
        name: &str,
        generator: &str,
        modifiers: &[Modifier],
    ) -> io::Result<&mut Self> {
        self.write_line(&format!("@{GENERATED_ANNOTATION}(\"{generator}\")"))?;
        self.write_line(&format!("{}class {name} {{", modifier_prefix(modifiers)))?;
        self.annotated = false;
        self.body_empty = true;
        self.depth += 1;
        Ok(self)
    }

    pub fn write_field(&mut self, ty: &str, name: &str, modifiers: &[Modifier]) -> io::Result<&mut Self> {
        self.write_line(&format!("{}{ty} {name};", modifier_prefix(modifiers)))?;
        self.body_empty = false;
        Ok(self)
    }

    /// Starts a constructor declaration, up to the opening parenthesis.
    pub fn write_constructor_declaration_start(
        &mut self,
        name: &str,
        modifiers: &[Modifier],
    ) -> io::Result<&mut Self> {
        self.start_declaration(&format!("{}{name}(", modifier_prefix(modifiers)))
    }

    /// Starts a method declaration, up to the opening parenthesis.
    pub fn write_method_declaration_start(
        &mut self,
        return_type: &str,
        name: &str,
        modifiers: &[Modifier],
    ) -> io::Result<&mut Self> {
        self.start_declaration(&format!("{}{return_type} {name}(", modifier_prefix(modifiers)))
    }

    /// Writes one parameter of the declaration in progress.
    ///
    /// `annotations` is written verbatim before the modifiers when not empty.
    pub fn write_method_parameter(
        &mut self,
        annotations: &str,
        ty: &str,
        name: &str,
        modifiers: &[Modifier],
    ) -> io::Result<&mut Self> {
        if self.parameters > 0 {
            self.out.write_all(b", ")?;
        }
        if !annotations.is_empty() {
            write!(self.out, "{annotations} ")?;
        }
        write!(self.out, "{}{ty} {name}", modifier_prefix(modifiers))?;
        self.parameters += 1;
        Ok(self)
    }

    /// Closes the parameter list, writes the throws clause and opens the body.
    pub fn write_method_declaration_end(&mut self, thrown_types: &[String]) -> io::Result<&mut Self> {
        if thrown_types.is_empty() {
            self.out.write_all(b") {\n")?;
        } else {
            writeln!(self.out, ") throws {} {{", thrown_types.join(", "))?;
        }
        self.parameters = 0;
        self.depth += 1;
        Ok(self)
    }

    /// Writes `this.<field> = <value>;`.
    pub fn write_field_assignment(&mut self, field: &str, value: &str) -> io::Result<&mut Self> {
        self.write_line(&format!("this.{field} = {value};"))?;
        Ok(self)
    }

    /// Starts a return statement; finish it with [`SourceFileWriter::write_statement_end`].
    pub fn write_return_start(&mut self) -> io::Result<&mut Self> {
        self.write_indent()?;
        self.out.write_all(b"return ")?;
        Ok(self)
    }

    /// Writes `new <type>(<arguments>)`.
    pub fn write_new_instance(&mut self, ty: &str, arguments: &[String]) -> io::Result<&mut Self> {
        write!(self.out, "new {ty}({})", arguments.join(", "))?;
        Ok(self)
    }

    pub fn write_statement_end(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b";\n")?;
        Ok(self)
    }

    /// Closes the innermost open block.
    pub fn write_block_end(&mut self) -> io::Result<&mut Self> {
        self.depth = self.depth.saturating_sub(1);
        self.write_line("}")?;
        Ok(self)
    }

    /// Flushes and releases the underlying file.
    pub fn close(mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn start_declaration(&mut self, head: &str) -> io::Result<&mut Self> {
        // Members after the first one are separated by a blank line.
        if !self.annotated && !self.body_empty {
            self.out.write_all(b"\n")?;
        }
        self.annotated = false;
        self.body_empty = false;
        self.write_indent()?;
        self.out.write_all(head.as_bytes())?;
        self.parameters = 0;
        Ok(self)
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if !line.is_empty() {
            self.write_indent()?;
            self.out.write_all(line.as_bytes())?;
        }
        self.out.write_all(b"\n")
    }
}

/// Renders modifiers followed by a space, or nothing.
fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|modifier| format!("{modifier} "))
        .collect()
}
