use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `-U0` diff touching two tracked files and one untracked file.
pub(crate) const SAMPLE_DIFF: &str = r#"diff --git a/AcadExtensions/Commands.cs b/AcadExtensions/Commands.cs
index 1111111..2222222 100644
--- a/AcadExtensions/Commands.cs
+++ b/AcadExtensions/Commands.cs
@@ -17,0 +18,2 @@ namespace AcadExtensions
+        var doc = Application.DocumentManager.MdiActiveDocument;
+        // pick a point
@@ -20,0 +23 @@ namespace AcadExtensions
+        }
diff --git a/README.md b/README.md
index 5555555..6666666 100644
--- a/README.md
+++ b/README.md
@@ -1,0 +2,2 @@
+Usage notes
+
diff --git a/Core/Program.cs b/Core/Program.cs
index 3333333..4444444 100644
--- a/Core/Program.cs
+++ b/Core/Program.cs
@@ -29,0 +30,3 @@ namespace Core
+            var total = Sum(items);
+
+            return total;
"#;

/// Coverage for [`SAMPLE_DIFF`] with absolute paths under `root`.
///
/// New lines 18, 30 and 32 are hit, 19 is missed, 23 and 31 are not
/// instrumented. Line 5 of Program.cs is instrumented but untouched.
pub(crate) fn sample_coverage(root: &Path) -> String {
    let commands = root.join("AcadExtensions").join("Commands.cs");
    let program = root.join("Core").join("Program.cs");

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<coverage version="1">
  <file path="{}">
    <lineToCover lineNumber="18" covered="True"/>
    <lineToCover lineNumber="19" covered="False"/>
  </file>
  <file path="{}">
    <lineToCover lineNumber="5" covered="False"/>
    <lineToCover lineNumber="30" covered="True"/>
    <lineToCover lineNumber="32" covered="True"/>
  </file>
</coverage>
"#,
        commands.display(),
        program.display()
    )
}

/// Temporary directory holding the inputs and output of one run.
pub(crate) struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn diff_path(&self) -> PathBuf {
        self.root().join("change.diff")
    }

    pub(crate) fn coverage_path(&self) -> PathBuf {
        self.root().join("coverage.xml")
    }

    pub(crate) fn report_path(&self) -> PathBuf {
        self.root().join("diff_coverage.txt")
    }

    pub(crate) fn write_diff(&self, content: &str) {
        std::fs::write(self.diff_path(), content).unwrap();
    }

    pub(crate) fn write_coverage(&self, content: &str) {
        std::fs::write(self.coverage_path(), content).unwrap();
    }

    pub(crate) fn read_report(&self) -> String {
        std::fs::read_to_string(self.report_path()).unwrap()
    }
}
