//! Candidate discovery and source rewriting.
//!
//! Walks the project for TypeScript sources, finds top-level variable
//! declarations initialized with a tagged-template CSS literal, and replaces
//! each initializer with the `styled(...)` call synthesized by
//! [`styled_rewrite`]. Every declaration is processed independently; a
//! literal that fails to parse is reported and left untouched.

use crate::cli::Args;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSetBuilder};
use serde::Serialize;
use std::fs;
use std::sync::Arc;
use styled_rewrite::{parse, synthesize, TagShape};
use swc_common::{FileName, SourceMap, Spanned};
use swc_ecma_ast::{Decl, Expr, MemberProp, Module, ModuleDecl, ModuleItem, Pat, Stmt};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;
use walkdir::WalkDir;

/// Driver errors. These abort the run; per-declaration failures do not.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The project directory has no tsconfig.json.
    #[error("cannot find tsconfig.json in {0}")]
    MissingTsConfig(Utf8PathBuf),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Failed to write a rewritten file back.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// The file being written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// The outcome for one candidate declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RewriteStatus {
    /// The initializer was replaced.
    Rewritten,
    /// The template contains embedded expressions; deliberately not handled.
    SkippedTemplateExpressions,
    /// The tag is neither a property access nor a single-argument call.
    SkippedTagShape,
    /// The CSS literal failed to parse; the declaration was left untouched.
    Failed {
        /// The parse error, rendered.
        message: String,
    },
}

impl RewriteStatus {
    /// Short human-readable description of the outcome.
    pub fn describe(&self) -> String {
        match self {
            Self::Rewritten => "rewritten".to_string(),
            Self::SkippedTemplateExpressions => {
                "skipped (template contains expressions)".to_string()
            }
            Self::SkippedTagShape => "skipped (unsupported tag shape)".to_string(),
            Self::Failed { message } => format!("failed ({message})"),
        }
    }
}

/// One candidate declaration's report record.
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationReport {
    /// Path relative to the project directory.
    pub file: String,
    /// The declared variable name.
    pub declaration: String,
    /// 1-based line of the declaration in the original source.
    pub line: u32,
    /// What happened to it.
    pub status: RewriteStatus,
}

/// Aggregate result of a run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Number of source files scanned.
    pub files_scanned: usize,
    /// Number of files whose contents changed (or would change, on dry runs).
    pub files_changed: usize,
    /// Count of rewritten declarations.
    pub rewritten: usize,
    /// Count of skipped declarations (template or tag shape).
    pub skipped: usize,
    /// Count of declarations whose literal failed to parse.
    pub failed: usize,
    /// Per-declaration records, in discovery order.
    pub reports: Vec<DeclarationReport>,
}

/// Runs the rewrite over the whole project.
pub fn run(args: &Args) -> Result<RunSummary, DriverError> {
    let project_dir = &args.project_dir;
    if !project_dir.join("tsconfig.json").is_file() {
        return Err(DriverError::MissingTsConfig(project_dir.clone()));
    }

    let mut ignore_builder = GlobSetBuilder::new();
    for pattern in &args.ignore {
        let glob = Glob::new(pattern).map_err(|e| DriverError::InvalidGlob(e.to_string()))?;
        ignore_builder.add(glob);
    }
    for pattern in ["**/node_modules/**", "**/dist/**", "**/.git/**"] {
        if let Ok(glob) = Glob::new(pattern) {
            ignore_builder.add(glob);
        }
    }
    let ignore_set = ignore_builder
        .build()
        .map_err(|e| DriverError::InvalidGlob(e.to_string()))?;

    let files: Vec<Utf8PathBuf> = WalkDir::new(project_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| is_source_file(p))
        .filter(|p| {
            let relative = p.strip_prefix(project_dir).unwrap_or(p);
            !ignore_set.is_match(relative.as_str())
        })
        .collect();

    let mut summary = RunSummary::default();

    // One file, one declaration at a time; failures stay local.
    for file_path in files {
        let source = match fs::read_to_string(&file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to read {}: {}", file_path, e);
                continue;
            }
        };
        summary.files_scanned += 1;

        let tsx = file_path.extension() == Some("tsx");
        let outcome = rewrite_source(&source, tsx);

        let relative = file_path
            .strip_prefix(project_dir)
            .unwrap_or(&file_path)
            .to_string();
        for (declaration, line, status) in outcome.declarations {
            match &status {
                RewriteStatus::Rewritten => summary.rewritten += 1,
                RewriteStatus::SkippedTemplateExpressions | RewriteStatus::SkippedTagShape => {
                    summary.skipped += 1
                }
                RewriteStatus::Failed { .. } => summary.failed += 1,
            }
            summary.reports.push(DeclarationReport {
                file: relative.clone(),
                declaration,
                line,
                status,
            });
        }

        if let Some(new_source) = outcome.new_source {
            summary.files_changed += 1;
            if !args.dry_run {
                fs::write(&file_path, new_source).map_err(|source| DriverError::WriteFailed {
                    path: file_path.clone(),
                    source,
                })?;
            }
        }
    }

    Ok(summary)
}

fn is_source_file(path: &Utf8Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    if name.ends_with(".d.ts") {
        return false;
    }
    matches!(path.extension(), Some("ts") | Some("tsx"))
}

/// The result of rewriting one file's source text.
struct FileRewrite {
    /// The rewritten source, if any declaration changed.
    new_source: Option<String>,
    /// (name, line, status) per candidate declaration, in source order.
    declarations: Vec<(String, u32, RewriteStatus)>,
}

/// Rewrites all candidate declarations in one source file.
fn rewrite_source(source: &str, tsx: bool) -> FileRewrite {
    let Some((module, base_pos)) = parse_module(source, tsx) else {
        // Files swc cannot parse are left alone.
        return FileRewrite {
            new_source: None,
            declarations: Vec::new(),
        };
    };

    let mut declarations = Vec::new();
    let mut edits: Vec<(usize, usize, String)> = Vec::new();

    for item in &module.body {
        let var_decl = match item {
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => var,
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
                Decl::Var(var) => var,
                _ => continue,
            },
            _ => continue,
        };

        for declarator in &var_decl.decls {
            let Pat::Ident(binding) = &declarator.name else {
                continue;
            };
            let Some(init) = &declarator.init else {
                continue;
            };
            let Expr::TaggedTpl(tagged) = &**init else {
                continue;
            };

            let name = binding.id.sym.to_string();
            let init_lo = (init.span().lo.0 - base_pos) as usize;
            let init_hi = (init.span().hi.0 - base_pos) as usize;
            let line = line_number(source, init_lo);

            if !tagged.tpl.exprs.is_empty() {
                declarations.push((name, line, RewriteStatus::SkippedTemplateExpressions));
                continue;
            }
            let Some(quasi) = tagged.tpl.quasis.first() else {
                continue;
            };
            let literal = quasi
                .cooked
                .as_ref()
                .map(|cooked| cooked.to_string_lossy().into_owned())
                .unwrap_or_else(|| quasi.raw.to_string());

            let Some(shape) = classify_tag(&tagged.tag, source, base_pos) else {
                declarations.push((name, line, RewriteStatus::SkippedTagShape));
                continue;
            };

            match parse(&literal) {
                Ok(sheet) => {
                    let replacement = synthesize(&sheet, &shape);
                    let indent = line_indent(source, init_lo);
                    edits.push((init_lo, init_hi, reindent(&replacement, indent)));
                    declarations.push((name, line, RewriteStatus::Rewritten));
                }
                Err(err) => {
                    declarations.push((
                        name,
                        line,
                        RewriteStatus::Failed {
                            message: err.to_string(),
                        },
                    ));
                }
            }
        }
    }

    if edits.is_empty() {
        return FileRewrite {
            new_source: None,
            declarations,
        };
    }

    let mut rewritten = source.to_string();
    for (lo, hi, text) in edits.into_iter().rev() {
        rewritten.replace_range(lo..hi, &text);
    }
    FileRewrite {
        new_source: Some(rewritten),
        declarations,
    }
}

fn parse_module(source: &str, tsx: bool) -> Option<(Module, u32)> {
    let cm: Arc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("candidate-source".into()).into(),
        source.to_string(),
    );
    let syntax = Syntax::Typescript(TsSyntax {
        tsx,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
    let module = parser.parse_module().ok()?;
    Some((module, fm.start_pos.0))
}

/// Classifies the tag expression of a tagged template.
///
/// `styled.button` yields an element shape named by the property;
/// `styled(Component)` yields a wrapped shape carrying the argument's
/// verbatim source text. Everything else is unsupported.
fn classify_tag(tag: &Expr, source: &str, base_pos: u32) -> Option<TagShape> {
    match tag {
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(ident) => Some(TagShape::Element(ident.sym.to_string())),
            _ => None,
        },
        Expr::Call(call) if call.args.len() == 1 && call.args[0].spread.is_none() => {
            let span = call.args[0].expr.span();
            let lo = (span.lo.0 - base_pos) as usize;
            let hi = (span.hi.0 - base_pos) as usize;
            Some(TagShape::Wrapped(source[lo..hi].to_string()))
        }
        _ => None,
    }
}

fn line_number(source: &str, offset: usize) -> u32 {
    source[..offset].bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Leading whitespace of the line containing `offset`.
fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &source[line_start..];
    let indent_len = line.len() - line.trim_start().len();
    &line[..indent_len]
}

/// Indents continuation lines of a replacement to sit under its declaration.
/// The original tool delegated this to the project formatter; aligning here
/// keeps diffs readable without one.
fn reindent(replacement: &str, indent: &str) -> String {
    if indent.is_empty() || !replacement.contains('\n') {
        return replacement.to_string();
    }
    replacement.replace('\n', &format!("\n{indent}"))
}
