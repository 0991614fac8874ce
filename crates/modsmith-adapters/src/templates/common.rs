//! Files every project gets: Gradle build and settings, README, ignore
//! file, and optionally VS Code settings and the Gradle wrapper config.

use modsmith_core::{
    domain::{ProjectConfig, TemplateFileSet, layout},
    error::ModsmithResult,
};
use serde_json::json;

use super::vars::{RenderVars, groovy_single, groovy_string};

const SETTINGS_GRADLE: &str = r#"plugins {
    // Apply the foojay-resolver plugin to allow automatic download of JDKs
    id 'org.gradle.toolchains.foojay-resolver-convention' version '1.0.0'
}
rootProject.name = '{{ROOT_NAME}}'
"#;

const BUILD_GRADLE: &str = r#"plugins {
    id 'java'
}

// Change the values below this to your mods values
// To change the project name, edit the settings.gradle file

project.ext.modID = "{{MOD_ID}}" // The unique id of your mod. Must be all lowercase and cannot use special characters.
project.ext.modName = "{{MOD_NAME}}" // The display name of your mod.
project.ext.modVersion = "{{MOD_VERSION}}" // Your current builds version. Must follow the xx.xx... format.
project.ext.gameVersion = "{{GAME_VERSION}}" // The target game version.
project.ext.modDescription = "{{DESCRIPTION}}" // Short description of what your mod is.
project.ext.author = "{{AUTHOR}}" // Your name

/**
 * When setting clientside to true, it means servers do not need this mod for clients to connect and vice versa.
 * IMPORTANT: If you set this to true, make sure that your mod does not add any content or do anything
 * that could cause clients and servers to desync. This includes registering any items, objects, tiles, packets etc.
 */
project.ext.clientside = {{CLIENTSIDE}}

/**
 * The other mod dependencies of this mod
 * Dependencies define the default load order of mods
 * Uncomment and configure these if your mod has dependencies
 */
//project.ext.modDependencies = ["other.modid1", "other.modid2"]
//project.ext.modOptionalDependencies = ["optional.modid1", "optional.modid2"]

// The path to the games install directory
def gameDirectory = "{{GAME_DIR}}"

// =================================================
// ========== DO NOT EDIT BELOW THIS LINE ==========
// =================================================

// Name of the jar
def jarName = "${project.ext.modName.replace(" ", "")}-${project.ext.gameVersion}-${project.ext.modVersion}"
def modOutputDir = file("$buildDir/mod")

group = project.ext.modID
version = project.ext.modVersion

// Apply a specific Java toolchain to ease working on different environments.
java {
    toolchain {
        languageVersion = JavaLanguageVersion.of(25)
        vendor = JvmVendorSpec.ADOPTIUM
    }

    // Necesse requires Java 8 bytecode; a newer toolchain compiles it.
    sourceCompatibility = "$JavaVersion.VERSION_1_8"
    targetCompatibility = "$JavaVersion.VERSION_1_8"
}

tasks.withType(JavaCompile).configureEach {
    options.release.set(8)
    options.encoding = "UTF-8"
    options.compilerArgs += ["-Xlint:-options"]
}

repositories {
    mavenCentral()
}

configurations {
    libDepends
}

sourceSets {
    main {
        java {
            destinationDirectory.set(new File(modOutputDir, "classes"))
        }

        output.resourcesDir = new File(modOutputDir, "resources")

        // Adds libDepends configuration to classpath
        compileClasspath += configurations.libDepends
    }
}

def buildLocation = "build/jar/"

if (!file(gameDirectory + "/Necesse.jar").exists()) {
    throw new Exception("Could not find game install directory. Make sure it is correct in build.gradle file.")
}

dependencies {
    implementation files(gameDirectory + "/Necesse.jar")
    implementation fileTree(gameDirectory + "/lib/")
    implementation fileTree("./mods/") // Add all mods located in local mods folder

    // Add any third party library dependencies here. Remember to use libDepends, so that they will be added to your jar on build
    // These are some examples:
//    libDepends group: 'com.google.guava', name: 'guava', version: '31.1-jre'
//    libDepends files("path/to/library/jar.jar")
}

task createAppID {
    group = "necesse"
    description = "Creates steam_appid.txt file"

    doLast {
        file("steam_appid.txt").text = "1169040"
    }
}

task createModInfoFile(type: JavaExec) {
    group = "necesse"
    description = "Creates the mod info file"

    classpath = files(gameDirectory + "/Necesse.jar")
    doFirst {
        sourceSets.main.java.destinationDirectory.get().asFile.mkdirs()
    }

    mainClass.set("CreateModInfoFile")
    args = ["-file", "${sourceSets.main.java.destinationDirectory.get()}/mod.info",
            "-id", "${project.ext.modID}",
            "-name", "${project.ext.modName}",
            "-version", "${project.ext.modVersion}",
            "-gameVersion", "${project.ext.gameVersion}",
            "-description", "${project.ext.modDescription}",
            "-author", "${project.ext.author}",
            "-clientside", "${project.ext.clientside}",
            "-dependencies", project.ext.has("modDependencies") ? "[" + project.ext.modDependencies.join(", ") + "]" : "",
            "-optionalDependencies", project.ext.has("modOptionalDependencies") ? "[" + project.ext.modOptionalDependencies.join(", ") + "]" : ""]
}
// Makes compiling also create mod info file
tasks.named('classes') {
    dependsOn("createModInfoFile")
}

task runClient(type: JavaExec) {
    group = "necesse"
    description = "Run client with current mod"
    dependsOn("buildModJar", "createAppID")

    classpath = files(gameDirectory + "/Necesse.jar")

    jvmArgs = ["-Xms512m", "-Xmx4G", "-XX:+UnlockExperimentalVMOptions", "-XX:+UseG1GC", "-XX:G1NewSizePercent=20", "-XX:G1ReservePercent=20", "-XX:MaxGCPauseMillis=50", "-XX:G1HeapRegionSize=32M"]
    args = ["-dev", "-mod \"${buildLocation}\""]
}

task runDevClient(type: JavaExec) {
    group = "necesse"
    description = "Run client with current mod"
    dependsOn("buildModJar", "createAppID")

    classpath = files(gameDirectory + "/Necesse.jar")

    jvmArgs = ["-Xms512m", "-Xmx4G", "-XX:+UnlockExperimentalVMOptions", "-XX:+UseG1GC", "-XX:G1NewSizePercent=20", "-XX:G1ReservePercent=20", "-XX:MaxGCPauseMillis=50", "-XX:G1HeapRegionSize=32M"]
    args = ["-dev 1", "-mod \"${buildLocation}\""]
}

task runServer(type: JavaExec) {
    group = "necesse"
    description = "Run server with current mod"
    dependsOn("buildModJar")

    classpath = files(gameDirectory + "/Server.jar")

    mainClass.set("StartServer")
    jvmArgs = ["-Xms512m", "-Xmx4G", "-XX:+UnlockExperimentalVMOptions", "-XX:+UseG1GC", "-XX:G1NewSizePercent=20", "-XX:G1ReservePercent=20", "-XX:MaxGCPauseMillis=50", "-XX:G1HeapRegionSize=32M"]
    args = ["-mod \"${buildLocation}\""]
}

task buildModJar(type: Jar) {
    group = "necesse"
    description = "Generates the mod jar into the build folder"
    dependsOn("classes")

    doFirst {
        fileTree(dir: buildLocation).exclude("${jarName}.jar").visit { FileVisitDetails details ->
            delete details.file
        }
    }

    // Add compiled classes and generated resources
    from sourceSets.main.java.destinationDirectory.get()
    // Add resources under 'resources/' prefix in JAR
    from(sourceSets.main.output.resourcesDir) {
        into 'resources'
    }
    // Add the dependencies
    from configurations.libDepends.collect { it.isDirectory() ? it : zipTree(it) }

    archiveFileName.set("${jarName}.jar")
    destinationDirectory.set(file(buildLocation))
}
"#;

const README: &str = r#"# {{MOD_NAME}}

{{DESCRIPTION}}

## Author
{{AUTHOR}}

## Installation
```bash
gradle buildModJar
```

The mod will automatically copy to your Necesse mods folder.

## Development

```bash
gradle runDevClient
```
"#;

const GITIGNORE: &str = ".gradle/
build/
out/
.vscode/
.idea/
*.class
*.jar
*.war
*.log
.DS_Store
Thumbs.db
";

const WRAPPER_PROPERTIES: &str = "distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
distributionUrl=https\\://services.gradle.org/distributions/gradle-9.1.0-bin.zip
networkTimeout=10000
validateDistributionUrl=true
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
";

pub const WRAPPER_PROPERTIES_PATH: &str = "gradle/wrapper/gradle-wrapper.properties";

/// Gradle invocation used by the VS Code tasks, fixed at compile time.
const GRADLEW: &str = if cfg!(windows) {
    ".\\gradlew.bat"
} else {
    "./gradlew"
};

/// Render the shared bundle for `config`.
pub fn common_files(config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
    let game_dir = config.game_directory_normalized();
    let gradle = RenderVars::new()
        .set("MOD_ID", config.mod_id())
        .set("MOD_NAME", groovy_string(config.mod_name()))
        .set("MOD_VERSION", groovy_string(config.mod_version()))
        .set("GAME_VERSION", groovy_string(config.game_version()))
        .set("DESCRIPTION", groovy_string(config.description()))
        .set("AUTHOR", groovy_string(config.author()))
        .set("CLIENTSIDE", config.clientside().to_string())
        .set("GAME_DIR", groovy_string(&game_dir));
    let settings = RenderVars::new().set("ROOT_NAME", groovy_single(&config.project_dir_name()));
    let readme = RenderVars::new()
        .set("MOD_NAME", config.mod_name())
        .set("DESCRIPTION", config.description())
        .set("AUTHOR", config.author());

    let mut files = TemplateFileSet::new();
    files.insert(layout::MARKER_FILE, gradle.render(BUILD_GRADLE)?)?;
    files.insert(layout::SETTINGS_FILE, settings.render(SETTINGS_GRADLE)?)?;
    files.insert("README.md", readme.render(README)?)?;
    files.insert(".gitignore", GITIGNORE)?;

    if config.include_editor_config() {
        files.insert(
            ".vscode/settings.json",
            pretty(&json!({
                "java.configuration.updateBuildConfiguration": "automatic",
                "java.compile.nullAnalysis.mode": "automatic",
                "files.exclude": {
                    "**/.gradle": true,
                    "**/build": true
                },
                "java.project.sourcePaths": [layout::JAVA_ROOT],
                "java.project.referencedLibraries": [
                    "lib/**/*.jar",
                    format!("{game_dir}/{}", layout::GAME_ARCHIVE)
                ]
            }))?,
        )?;
        files.insert(
            ".vscode/tasks.json",
            pretty(&json!({
                "version": "2.0.0",
                "tasks": [
                    {
                        "label": "Build Mod Jar",
                        "type": "shell",
                        "command": format!("{GRADLEW} buildModJar"),
                        "group": { "kind": "build", "isDefault": true }
                    },
                    {
                        "label": "Clean Build",
                        "type": "shell",
                        "command": format!("{GRADLEW} clean build"),
                        "group": "build"
                    },
                    {
                        "label": "Run Dev Client",
                        "type": "shell",
                        "command": format!("{GRADLEW} runDevClient"),
                        "group": "none"
                    }
                ]
            }))?,
        )?;
        files.insert(
            ".vscode/extensions.json",
            pretty(&json!({ "recommendations": ["vscjava.vscode-java-pack"] }))?,
        )?;
    }

    if config.include_wrapper() {
        files.insert(WRAPPER_PROPERTIES_PATH, WRAPPER_PROPERTIES)?;
    }

    Ok(files)
}

fn pretty(value: &serde_json::Value) -> ModsmithResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| modsmith_core::error::ModsmithError::Internal {
            message: format!("failed to serialize editor config: {e}"),
        })
}
