//! Realistic bodies for the files a web solution carries.
//!
//! Each builder produces the shape Visual Studio and NuGet actually write,
//! including namespaces and unrelated siblings, so parsers are exercised
//! against real-world noise rather than minimal snippets.

/// An MSBuild web application project (`*.csproj`).
///
/// `target_framework` is written verbatim as `<TargetFrameworkVersion>`;
/// `custom_server_url` as `<CustomServerUrl>` under the web project
/// properties. Either element is omitted when `None`.
pub fn csproj(target_framework: Option<&str>, custom_server_url: Option<&str>) -> String {
    let framework = target_framework
        .map(|v| format!("    <TargetFrameworkVersion>{v}</TargetFrameworkVersion>\n"))
        .unwrap_or_default();
    let server_url = custom_server_url
        .map(|url| format!("          <CustomServerUrl>{url}</CustomServerUrl>\n"))
        .unwrap_or_default();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <Import Project="$(MSBuildExtensionsPath)\$(MSBuildToolsVersion)\Microsoft.Common.props" Condition="Exists('$(MSBuildExtensionsPath)\$(MSBuildToolsVersion)\Microsoft.Common.props')" />
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <ProjectGuid>{{8C2FDC6A-4E0F-4B4B-9B55-4F6C1E0A1D2B}}</ProjectGuid>
    <OutputType>Library</OutputType>
    <RootNamespace>AlloyDemo</RootNamespace>
{framework}  </PropertyGroup>
  <ItemGroup>
    <Reference Include="System.Web" />
    <Content Include="Global.asax" />
  </ItemGroup>
  <ProjectExtensions>
    <VisualStudio>
      <FlavorProperties GUID="{{349c5851-65df-11da-9384-00065b846f21}}">
        <WebProjectProperties>
          <UseIIS>True</UseIIS>
          <IISUrl>http://localhost:51481/</IISUrl>
{server_url}        </WebProjectProperties>
      </FlavorProperties>
    </VisualStudio>
  </ProjectExtensions>
</Project>
"#
    )
}

fn site_settings(site_url: &str) -> String {
    format!(
        r#"<sites>
      <site siteId="AlloyDemo" description="Example Site">
        <siteSettings pageStartId="3" pageRootId="1" pageWastebasketId="2" siteUrl="{site_url}" uiUrl="~/EPiServer/CMS/" utilUrl="~/util/" />
      </site>
    </sites>"#
    )
}

/// A standalone `episerver.config` declaring one site.
pub fn episerver_config(site_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<episerver xmlns="http://EPiServer.Configuration.EPiServerSection">
    {}
</episerver>
"#,
        site_settings(site_url)
    )
}

/// A `web.config` with the EPiServer section inlined.
pub fn web_config_with_site(site_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<configuration>
  <configSections>
    <section name="episerver" type="EPiServer.Configuration.EPiServerSection, EPiServer.Configuration" />
  </configSections>
  <episerver xmlns="http://EPiServer.Configuration.EPiServerSection">
    {}
  </episerver>
  <system.web>
    <compilation debug="true" targetFramework="4.6.1" />
  </system.web>
</configuration>
"#,
        site_settings(site_url)
    )
}

/// A `web.config` without any EPiServer site section.
pub fn web_config() -> String {
    r#"<?xml version="1.0" encoding="utf-8"?>
<configuration>
  <appSettings>
    <add key="webpages:Version" value="3.0.0.0" />
  </appSettings>
  <system.web>
    <compilation debug="true" targetFramework="4.6.1" />
  </system.web>
</configuration>
"#
    .to_string()
}

/// A NuGet `packages.config` listing `(id, version)` pairs.
pub fn packages_config(packages: &[(&str, &str)]) -> String {
    let entries: String = packages
        .iter()
        .map(|(id, version)| {
            format!("  <package id=\"{id}\" version=\"{version}\" targetFramework=\"net461\" />\n")
        })
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n{entries}</packages>\n")
}

/// A minimal PE image carrying a `VS_FIXEDFILEINFO` block with the given
/// file version.
pub fn assembly_image(major: u16, minor: u16, build: u16, revision: u16) -> Vec<u8> {
    let mut image = Vec::with_capacity(256);
    image.extend_from_slice(b"MZ");
    image.resize(0x80, 0);
    image.extend_from_slice(b"PE\0\0");
    image.resize(0xC0, 0);
    for unit in "VS_VERSION_INFO".encode_utf16() {
        image.extend_from_slice(&unit.to_le_bytes());
    }
    image.extend_from_slice(&[0, 0, 0, 0]);
    image.extend_from_slice(&0xFEEF_04BD_u32.to_le_bytes());
    image.extend_from_slice(&0x0001_0000_u32.to_le_bytes());
    image.extend_from_slice(&((u32::from(major) << 16) | u32::from(minor)).to_le_bytes());
    image.extend_from_slice(&((u32::from(build) << 16) | u32::from(revision)).to_le_bytes());
    image.extend_from_slice(&[0; 36]);
    image
}

/// `text` as UTF-16LE with a byte order mark, the way older Visual Studio
/// versions saved `web.config`.
pub fn utf16le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

/// `text` in the Windows-1252 code page. Its XML declaration should say so.
pub fn windows_1252(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
    bytes.into_owned()
}
