use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::element::Element;

/// Creates the source files a processor generates.
pub trait Filer {
    /// Creates a new source file for the type with the given qualified name.
    ///
    /// `originating` lists the elements the file is generated from. Creating
    /// the same file twice within a compilation is an error.
    fn create_source_file(
        &mut self,
        name: &str,
        originating: &[&Element],
    ) -> io::Result<Box<dyn Write + '_>>;
}

/// A source file held by a [`MemoryFiler`].
#[derive(Debug, Default, Clone)]
pub struct GeneratedFile {
    pub contents: Vec<u8>,
    pub originating: Vec<String>,
}

/// Keeps generated files in memory.
#[derive(Debug, Default)]
pub struct MemoryFiler {
    files: BTreeMap<String, GeneratedFile>,
    rejected: HashSet<String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later attempt to create `name` fail with an I/O error.
    pub fn reject(&mut self, name: impl Into<String>) {
        self.rejected.insert(name.into());
    }

    /// The contents of the generated file, if it exists and is valid UTF-8.
    pub fn source(&self, name: &str) -> Option<&str> {
        self.files
            .get(name)
            .and_then(|file| std::str::from_utf8(&file.contents).ok())
    }

    pub fn file(&self, name: &str) -> Option<&GeneratedFile> {
        self.files.get(name)
    }

    /// The names of every generated file, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn create_source_file(
        &mut self,
        name: &str,
        originating: &[&Element],
    ) -> io::Result<Box<dyn Write + '_>> {
        if self.rejected.contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot create {name}"),
            ));
        }

        if self.files.contains_key(name) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Attempt to recreate a file for type {name}"),
            ));
        }

        let file = self.files.entry(name.to_owned()).or_insert_with(|| GeneratedFile {
            contents: Vec::new(),
            originating: originating.iter().map(|element| element.to_string()).collect(),
        });

        Ok(Box::new(&mut file.contents))
    }
}

/// Writes generated files below a root directory, one `.java` file per type.
#[derive(Debug, Clone)]
pub struct DirectoryFiler {
    root: PathBuf,
}

impl DirectoryFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path a type with the given qualified name is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        let mut segments = name.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.java"));
            }
        }
        path
    }
}

impl Filer for DirectoryFiler {
    fn create_source_file(
        &mut self,
        name: &str,
        _originating: &[&Element],
    ) -> io::Result<Box<dyn Write + '_>> {
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        log::debug!("Creating source file {}", path.display());
        let file = File::create_new(&path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_filer_keeps_written_contents() {
        // Arrange the filer
        let mut filer = MemoryFiler::new();
        let origin = Element::class("com.example", "Foo");

        // Act the write
        {
            let mut file = filer.create_source_file("com.example.FooFactory", &[&origin]).unwrap();
            file.write_all(b"class FooFactory {}").unwrap();
        }

        // Assert the result
        assert_eq!(filer.source("com.example.FooFactory"), Some("class FooFactory {}"));
        assert_eq!(
            filer.file("com.example.FooFactory").unwrap().originating,
            vec!["com.example.Foo".to_owned()]
        );
    }

    #[test]
    fn test_memory_filer_refuses_to_recreate_a_file() {
        // Arrange the filer
        let mut filer = MemoryFiler::new();
        drop(filer.create_source_file("com.example.FooFactory", &[]).unwrap());

        // Act the second creation
        let result = filer.create_source_file("com.example.FooFactory", &[]);

        // Assert the result
        assert_eq!(result.err().map(|err| err.kind()), Some(io::ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_memory_filer_rejects_configured_names() {
        // Arrange the filer
        let mut filer = MemoryFiler::new();
        filer.reject("com.example.FooFactory");

        // Act the creation
        let rejected = filer.create_source_file("com.example.FooFactory", &[]).is_err();

        // Assert the result
        assert!(rejected);
        assert!(filer.is_empty());
    }

    #[test]
    fn test_directory_filer_maps_packages_to_directories() {
        // Arrange the filer
        let filer = DirectoryFiler::new("/out");

        // Act the mapping
        let nested = filer.path_for("com.example.FooFactory");
        let unnamed = filer.path_for("FooFactory");

        // Assert the result
        assert_eq!(nested, PathBuf::from("/out/com/example/FooFactory.java"));
        assert_eq!(unnamed, PathBuf::from("/out/FooFactory.java"));
    }

    #[test]
    fn test_directory_filer_writes_files() {
        // Arrange the filer
        let root = tempfile::tempdir().unwrap();
        let mut filer = DirectoryFiler::new(root.path());

        // Act the write
        {
            let mut file = filer.create_source_file("com.example.FooFactory", &[]).unwrap();
            file.write_all(b"class FooFactory {}").unwrap();
        }

        // Assert the result
        let written = fs::read_to_string(root.path().join("com/example/FooFactory.java")).unwrap();
        assert_eq!(written, "class FooFactory {}");
        assert!(filer.create_source_file("com.example.FooFactory", &[]).is_err());
    }
}
