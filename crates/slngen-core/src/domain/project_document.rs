//! SDK-style project documents.
//!
//! One document is built per workspace. Default item discovery is switched
//! off so the only sources the project sees are the ones the compile glob
//! selects.

use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::domain::{
    configuration::Configuration,
    error::DomainError,
    identity::ProjectGuid,
    settings::{GeneratorSettings, PROJECT_EXTENSION},
    solution::SolutionStanza,
    workspace::PathNormalizer,
};

const PROJECT_SDK: &str = "Microsoft.NET.Sdk";
const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// A binary reference: display name plus hint path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReference {
    pub include: String,
    pub hint_path: String,
}

impl AssemblyReference {
    /// `Plugins/Foo.dll` under location `Lib` and source root `Assets`
    /// becomes `Foo` hinting at `Assets/Lib/Plugins/Foo.dll`.
    ///
    /// The hint shares its root with the compile glob; both are read
    /// relative to the document's directory.
    pub fn new(assembly: &str, location: &str, source_root: &str) -> Self {
        Self {
            include: PathNormalizer::file_stem(assembly).to_string(),
            hint_path: PathNormalizer::join(
                source_root,
                &PathNormalizer::join(location, assembly),
            ),
        }
    }
}

/// In-memory form of one project document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    pub target_framework: String,
    pub references: Vec<AssemblyReference>,
    pub project_references: Vec<String>,
    pub compile_glob: String,
}

impl ProjectDocument {
    pub fn for_workspace(
        workspace: &str,
        configuration: &Configuration,
        settings: &GeneratorSettings,
    ) -> Self {
        let references = configuration
            .reference_assemblies()
            .iter()
            .map(|a| AssemblyReference::new(a, configuration.location(), &settings.source_root))
            .collect();

        let compile_glob = format!(
            "{}/**/*.{}",
            PathNormalizer::join(&settings.source_root, workspace),
            settings.source_extension
        );

        Self {
            target_framework: settings.target_framework.clone(),
            references,
            project_references: configuration.reference_projects().to_vec(),
            compile_glob,
        }
    }

    /// Serialize as indented XML with a trailing newline.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Start(
            BytesStart::new("Project")
                .with_attributes([("Sdk", PROJECT_SDK), ("xmlns", MSBUILD_NAMESPACE)]),
        ))?;

        writer.write_event(Event::Start(BytesStart::new("PropertyGroup")))?;
        for (name, value) in [
            ("TargetFramework", self.target_framework.as_str()),
            ("ImplicitUsings", "enable"),
            ("Nullable", "enable"),
            ("DefaultItemExcludes", "$(DefaultItemExcludes);**/*.meta"),
            ("EnableDefaultCompileItems", "false"),
            ("EnableDefaultEmbeddedResourceItems", "false"),
            ("EnableDefaultNoneItems", "false"),
        ] {
            write_text_element(&mut writer, name, value)?;
        }
        writer.write_event(Event::End(BytesEnd::new("PropertyGroup")))?;

        writer.write_event(Event::Start(BytesStart::new("ItemGroup")))?;
        for reference in &self.references {
            writer.write_event(Event::Start(
                BytesStart::new("Reference").with_attributes([("Include", reference.include.as_str())]),
            ))?;
            write_text_element(&mut writer, "HintPath", &reference.hint_path)?;
            writer.write_event(Event::End(BytesEnd::new("Reference")))?;
        }
        for project in &self.project_references {
            writer.write_event(Event::Empty(
                BytesStart::new("ProjectReference").with_attributes([("Include", project.as_str())]),
            ))?;
        }
        writer.write_event(Event::Empty(
            BytesStart::new("Compile").with_attributes([("Include", self.compile_glob.as_str())]),
        ))?;
        writer.write_event(Event::End(BytesEnd::new("ItemGroup")))?;

        writer.write_event(Event::End(BytesEnd::new("Project")))?;

        // Every fragment written above came from a `&str`.
        let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        xml.push('\n');
        Ok(xml)
    }
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Everything one workspace contributes to a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    assembly_name: String,
    guid: ProjectGuid,
    document: String,
}

impl GeneratedProject {
    pub fn for_workspace(
        workspace: &str,
        configuration: &Configuration,
        settings: &GeneratorSettings,
    ) -> Result<Self, DomainError> {
        let assembly_name = PathNormalizer::to_assembly_name(workspace);
        let document = ProjectDocument::for_workspace(workspace, configuration, settings)
            .to_xml()
            .map_err(|e| DomainError::DocumentSerialization {
                assembly: assembly_name.clone(),
                reason: e.to_string(),
            })?;
        let guid = ProjectGuid::derive(&assembly_name);

        Ok(Self {
            assembly_name,
            guid,
            document,
        })
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn file_name(&self) -> String {
        format!("{}.{PROJECT_EXTENSION}", self.assembly_name)
    }

    pub fn guid(&self) -> ProjectGuid {
        self.guid
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn stanza(&self) -> SolutionStanza {
        SolutionStanza::new(self.assembly_name.clone(), self.file_name(), self.guid)
    }
}
