//! Organization-wide constants shared by every project kind.
//! A plain immutable value set loaded with the binary; nothing here is
//! configurable per project.

/// NPM scope all published Rivierstad packages live under
pub const ORGANIZATION_SCOPE: &str = "@rivierstad";

/// License applied to every generated repository
pub const DEFAULT_LICENSE: &str = "EUPL-1.2";

/// Branch releases are cut from unless the caller overrides it
pub const DEFAULT_RELEASE_BRANCH: &str = "main";

/// Label that marks a dependency-upgrade PR as eligible for auto-merging
pub const AUTO_MERGE_LABEL: &str = "auto-merge";

/// Branch the auto-merge workflow targets by default
pub const DEFAULT_AUTO_MERGE_BRANCH: &str = "acceptance";

/// PR titles must carry one of these types to pass PR linting
pub const PR_LINT_LABELS: [&str; 4] = ["fix", "feat", "chore", "docs"];

/// Ignore entries mandated for every repository in the organization
pub const DEFAULT_GITIGNORE: [&str; 5] = [
    "test-reports/junit.xml",
    "test/__snapshots__/*",
    ".env",
    ".vscode",
    ".DS_Store",
];

/// Extra ignore entries for CDK apps (playwright output)
pub const CDK_APP_GITIGNORE: [&str; 2] =
    ["test/playwright/report", "test/playwright/screenshots"];

/// Construct library every CDK project must depend on
pub const ORGANIZATION_CONSTRUCTS: &str = "@rivierstad/aws-constructs";

/// Lint script added to CDK apps unless the caller supplies their own
pub const CFN_LINT_SCRIPT: &str = "cfn-lint cdk.out/**/*.template.json -i W3005 W2001";

/// Action reference that installs cfn-lint in the build workflow
pub const CFN_LINT_ACTION: &str = "scottbrenner/cfn-lint-action@v2";

/// Command the post-build cfn-lint step runs
pub const CFN_LINT_COMMAND: &str = "npx projen lint";

/// Token in the Statics sample template replaced by the resolved project name
pub const PROJECT_NAME_PLACEHOLDER: &str = "<project-name>";
