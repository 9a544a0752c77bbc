use std::path::{Path, PathBuf};

use skiff_core::SkiffConfig;

/// Shared text utility written once, the first time any function is scaffolded.
const GREETING_UTIL: &str = r#"export function createGreeting(name: string): string {
  return `Hello, ${name}!`;
}
"#;

/// Scaffold a new function directory with the HTTP handler template.
pub async fn new_function(function: &str) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = SkiffConfig::load(&project_dir)?;

    let functions_dir = project_dir.join(&config.project.functions_dir);
    let function_dir = functions_dir.join(function);
    if function_dir.exists() {
        anyhow::bail!("function directory '{}' already exists", function_dir.display());
    }

    std::fs::create_dir_all(&function_dir)?;
    std::fs::write(function_dir.join("index.ts"), handler_template(function))?;
    println!("Created {}", function_dir.join("index.ts").display());

    let util_path = functions_dir.join("shared/utils/greeting.ts");
    if !util_path.exists() {
        ensure_parent(&util_path)?;
        std::fs::write(&util_path, GREETING_UTIL)?;
        println!("Created {}", util_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  skiff bundle {function}         # bundle the entry point");
    println!("  skiff stage {function}          # materialize deployment files");
    println!("  skiff declarations {function}   # emit .d.ts files");
    Ok(())
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

fn handler_template(function: &str) -> String {
    format!(
        r#"import {{ http }} from '@google-cloud/functions-framework';
import type {{ Request, Response }} from 'express';
import {{ createGreeting }} from '~utils/greeting';

/**
 * HTTP entry point for the {function} function.
 */
http('{function}', (req: Request, res: Response) => {{
  const name = req.query.name || req.body.name || 'World';
  res.status(200).send(createGreeting(name as string));
}});
"#
    )
}
