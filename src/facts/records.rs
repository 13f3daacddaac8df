/// Payload structs for each fact variant, plus shorthand constructors.
///
/// Line numbers are 1-based as reported by the analysis tools, except for
/// duplicated ranges which are half-open `[start, end)` line indices.
use serde::{Deserialize, Serialize};

use super::Fact;

/// One sstate or premirror cache lookup for a task signature.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheLookup {
    pub recipe: String,
    pub signature: String,
    #[serde(default)]
    pub task: String,
    pub hit: bool,
}

/// Size of one source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSize {
    pub recipe: String,
    pub file: String,
    pub lines: u64,
    #[serde(default)]
    pub functions: u64,
    #[serde(default)]
    pub classes: u64,
}

/// Size of one recipe (build script) file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSize {
    pub recipe: String,
    pub file: String,
    pub lines: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Major,
    Minor,
    Info,
}

/// A style violation found in source code or in a recipe file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub recipe: String,
    pub file: String,
    pub line: u64,
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub message: String,
    pub severity: Severity,
}

/// Comment line count of one file. `lines` is the file's total line count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCount {
    pub recipe: String,
    pub file: String,
    pub lines: u64,
    pub comment_lines: u64,
}

/// Cyclomatic complexity of one function.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexitySample {
    pub recipe: String,
    pub file: String,
    pub function: String,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub end: u64,
    pub value: u64,
}

/// A block of `file` reported as a duplicate of code elsewhere.
/// `lines` is the total line count of `file`; `blocks` lists the other
/// copies when the detector reports them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatedRange {
    pub recipe: String,
    pub file: String,
    pub lines: u64,
    pub start: u64,
    pub end: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<DuplicateBlock>,
}

/// One copy of a duplicated block, `[start, end)` of `file` in `recipe`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateBlock {
    pub recipe: String,
    pub file: String,
    pub start: u64,
    pub end: u64,
}

impl DuplicateBlock {
    pub fn new(recipe: &str, file: &str, start: u64, end: u64) -> Self {
        Self {
            recipe: recipe.to_string(),
            file: file.to_string(),
            start,
            end,
        }
    }
}

impl DuplicatedRange {
    /// Number of lines in `[start, end)`.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Coverage of one statement (index 0) or one branch of a line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageLine {
    pub recipe: String,
    pub file: String,
    #[serde(default)]
    pub function: String,
    pub line: u64,
    #[serde(default)]
    pub index: u64,
    pub covered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Error,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub recipe: String,
    pub suite: String,
    pub name: String,
    pub status: TestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationStatus {
    Killed,
    Survived,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    pub recipe: String,
    pub file: String,
    #[serde(default)]
    pub mutator: String,
    pub line: u64,
    pub status: MutationStatus,
}

// ─── Shorthand constructors ──────────────────────────────────────────────

impl Fact {
    pub fn premirror_cache(recipe: &str, signature: &str, hit: bool) -> Self {
        Self::PremirrorCache(CacheLookup {
            recipe: recipe.to_string(),
            signature: signature.to_string(),
            task: String::new(),
            hit,
        })
    }

    pub fn shared_state_cache(recipe: &str, signature: &str, task: &str, hit: bool) -> Self {
        Self::SharedStateCache(CacheLookup {
            recipe: recipe.to_string(),
            signature: signature.to_string(),
            task: task.to_string(),
            hit,
        })
    }

    pub fn code_size(recipe: &str, file: &str, lines: u64, functions: u64, classes: u64) -> Self {
        Self::CodeSize(CodeSize {
            recipe: recipe.to_string(),
            file: file.to_string(),
            lines,
            functions,
            classes,
        })
    }

    pub fn recipe_size(recipe: &str, file: &str, lines: u64) -> Self {
        Self::RecipeSize(RecipeSize {
            recipe: recipe.to_string(),
            file: file.to_string(),
            lines,
        })
    }

    pub fn code_violation(recipe: &str, file: &str, line: u64, severity: Severity) -> Self {
        Self::CodeViolation(Violation {
            recipe: recipe.to_string(),
            file: file.to_string(),
            line,
            rule: String::new(),
            message: String::new(),
            severity,
        })
    }

    pub fn recipe_violation(recipe: &str, file: &str, line: u64, severity: Severity) -> Self {
        Self::RecipeViolation(Violation {
            recipe: recipe.to_string(),
            file: file.to_string(),
            line,
            rule: String::new(),
            message: String::new(),
            severity,
        })
    }

    pub fn comment(recipe: &str, file: &str, lines: u64, comment_lines: u64) -> Self {
        Self::Comment(CommentCount {
            recipe: recipe.to_string(),
            file: file.to_string(),
            lines,
            comment_lines,
        })
    }

    pub fn complexity(recipe: &str, file: &str, function: &str, value: u64) -> Self {
        Self::Complexity(ComplexitySample {
            recipe: recipe.to_string(),
            file: file.to_string(),
            function: function.to_string(),
            start: 0,
            end: 0,
            value,
        })
    }

    pub fn duplication(recipe: &str, file: &str, lines: u64, start: u64, end: u64) -> Self {
        Self::duplication_of(recipe, file, lines, start, end, Vec::new())
    }

    /// A duplicated range together with the other copies of the block.
    pub fn duplication_of(
        recipe: &str,
        file: &str,
        lines: u64,
        start: u64,
        end: u64,
        blocks: impl IntoIterator<Item = DuplicateBlock>,
    ) -> Self {
        Self::Duplication(DuplicatedRange {
            recipe: recipe.to_string(),
            file: file.to_string(),
            lines,
            start,
            end,
            blocks: blocks.into_iter().collect(),
        })
    }

    pub fn statement_coverage(recipe: &str, file: &str, line: u64, covered: bool) -> Self {
        Self::StatementCoverage(CoverageLine {
            recipe: recipe.to_string(),
            file: file.to_string(),
            function: String::new(),
            line,
            index: 0,
            covered,
        })
    }

    pub fn branch_coverage(recipe: &str, file: &str, line: u64, index: u64, covered: bool) -> Self {
        Self::BranchCoverage(CoverageLine {
            recipe: recipe.to_string(),
            file: file.to_string(),
            function: String::new(),
            line,
            index,
            covered,
        })
    }

    pub fn unit_test(recipe: &str, suite: &str, name: &str, status: TestStatus) -> Self {
        Self::UnitTest(TestOutcome {
            recipe: recipe.to_string(),
            suite: suite.to_string(),
            name: name.to_string(),
            status,
        })
    }

    pub fn mutation_test(recipe: &str, file: &str, line: u64, status: MutationStatus) -> Self {
        Self::MutationTest(MutationOutcome {
            recipe: recipe.to_string(),
            file: file.to_string(),
            mutator: String::new(),
            line,
            status,
        })
    }
}
