//! Role Context Manager cheatsheet content

use crate::inline::Inline::{Code, Strong, Text};
use crate::model::{
    AgentEntry, Catalog, CommandEntry, Detail, Flag, FlagLayout, FooterLine, HookCommand,
    HookOutcome, HookSection, Pattern, Phase, ReferenceRow, ReferenceSection, ScopeRow,
    ScopeSection, SectionId,
};

const SCOPE_FLAGS: &[Flag] = &[
    Flag {
        name: "--global",
        effect: "apply to ~/.claude/",
    },
    Flag {
        name: "--project",
        effect: "apply to ./.claude/",
    },
];

const INIT_ORG_TEMPLATE: CommandEntry = CommandEntry {
    name: "/init-org-template",
    args: "",
    scoped: true,
    purpose: "Initialize organizational framework from a template",
    summary: "Initialize organizational framework",
    flags: SCOPE_FLAGS,
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Bullets {
            label: "What it does",
            items: &[
                &[Text("Invokes Template Setup Assistant agent")],
                &[Text("Analyzes your project structure")],
                &[Text("Presents available templates (software-org, startup-org)")],
                &[Text("Applies chosen template to appropriate scope")],
                &[Text("Records template tracking for auto-updates")],
            ],
        },
        Detail::Flags,
    ],
};

const SETUP_PLUGIN_HOOKS: CommandEntry = CommandEntry {
    name: "/setup-plugin-hooks",
    args: "",
    scoped: true,
    purpose: "Configure SessionStart hook for automatic validation",
    summary: "Configure SessionStart hook",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[Detail::Bullets {
        label: "What it configures",
        items: &[
            &[Text("Adds SessionStart hook to settings.json")],
            &[Text("Sets up automatic validation and update checks")],
            &[Text("Creates setup marker file")],
        ],
    }],
};

const SET_ROLE: CommandEntry = CommandEntry {
    name: "/set-role",
    args: "[role-name]",
    scoped: true,
    purpose: "Set your current role to determine which documents load",
    summary: "Set your current role",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Labeled {
            label: "Parameters",
            text: &[Text(
                "role-name (required, e.g., software-engineer, product-manager)",
            )],
        },
        Detail::Bullets {
            label: "What it does",
            items: &[
                &[Text("Validates role exists at current organizational level")],
                &[Text("Updates preferences.json with your role")],
                &[Text("Initializes role-specific document references")],
                &[Text("Displays documents that will load on next session")],
            ],
        },
    ],
};

const SET_ORG_LEVEL: CommandEntry = CommandEntry {
    name: "/set-org-level",
    args: "[level]",
    scoped: true,
    purpose: "Explicitly set organizational level",
    summary: "Set organizational level",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Bullets {
            label: "Levels",
            items: &[
                &[
                    Strong("company"),
                    Text(" - Root level (CTO, CPO, CISO, VP Engineering)"),
                ],
                &[
                    Strong("system"),
                    Text(" - Coordination level (Engineering Manager, Platform Engineer)"),
                ],
                &[
                    Strong("product"),
                    Text(" - Product management level (Product Manager, QA Manager, UX Designer)"),
                ],
                &[
                    Strong("project"),
                    Text(" - Implementation level (Software Engineer, DevOps Engineer, QA Engineer)"),
                ],
            ],
        },
        Detail::Labeled {
            label: "When to use",
            text: &[Text(
                "Directory structure doesn't match standard patterns, want to override automatic detection",
            )],
        },
    ],
};

const SHOW_ROLE_CONTEXT: CommandEntry = CommandEntry {
    name: "/show-role-context",
    args: "",
    scoped: false,
    purpose: "Display current role and document loading status",
    summary: "Display current configuration",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[Detail::Bullets {
        label: "Shows",
        items: &[
            &[Text("Configuration hierarchy (both global and project configs)")],
            &[Text("Current organizational level")],
            &[Text("Current role (with source scope indicator)")],
            &[Text("Documents that will load (✓ exists, ! missing, - excluded)")],
            &[Text("Custom additions and removals")],
        ],
    }],
};

const UPDATE_ROLE_DOCS: CommandEntry = CommandEntry {
    name: "/update-role-docs",
    args: "[+/-]file ...",
    scoped: true,
    purpose: "Customize which documents load for your role",
    summary: "Customize document references",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Bullets {
            label: "Syntax",
            items: &[
                &[Code("+path/to/doc.md"), Text(" - Add a document")],
                &[
                    Code("-/quality-standards.md"),
                    Text(" - Remove a document (absolute path with /)"),
                ],
                &[Code("+new.md -old.md +another.md"), Text(" - Multiple changes")],
            ],
        },
        Detail::Labeled {
            label: "Supports",
            text: &[Text(
                "Relative paths (relative to current directory), Absolute paths (from repository root, start with /)",
            )],
        },
    ],
};

const INIT_ROLE_DOCS: CommandEntry = CommandEntry {
    name: "/init-role-docs",
    args: "[--reset]",
    scoped: false,
    purpose: "Initialize or reset document references to role guide defaults",
    summary: "Reset to role guide defaults",
    flags: &[Flag {
        name: "--reset",
        effect: "Reset to defaults, clearing customizations",
    }],
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Flags,
        Detail::Labeled {
            label: "When to use",
            text: &[Text(
                "First time setting up a role, want to reset customizations, role guide has been updated",
            )],
        },
    ],
};

const GENERATE_DOCUMENT: CommandEntry = CommandEntry {
    name: "/generate-document",
    args: "[type] [--auto]",
    scoped: false,
    purpose: "Generate documents from templates using role context",
    summary: "Generate documents from templates",
    flags: &[Flag {
        name: "--auto",
        effect: "Batch mode with minimal interaction",
    }],
    flag_layout: FlagLayout::Inline,
    details: &[
        Detail::Bullets {
            label: "Supported Document Types",
            items: &[
                &[
                    Strong("Technical:"),
                    Text(" ADR, TDD, API docs, operational runbook"),
                ],
                &[
                    Strong("Product:"),
                    Text(" PRD, feature spec, user story, product overview"),
                ],
                &[
                    Strong("Strategic:"),
                    Text(" OKRs, roadmap, strategy, vision"),
                ],
                &[
                    Strong("Standards:"),
                    Text(" Engineering standards, quality standards, security policy"),
                ],
                &[
                    Strong("Process:"),
                    Text(" Contributing guide, development setup, team handbook"),
                ],
            ],
        },
        Detail::Flags,
    ],
};

const VALIDATE_SETUP: CommandEntry = CommandEntry {
    name: "/validate-setup",
    args: "[flags]",
    scoped: true,
    purpose: "Validate .claude directory structure and configuration",
    summary: "Validate .claude directory",
    flags: &[
        Flag {
            name: "--quick",
            effect: "Essential checks only",
        },
        Flag {
            name: "--fix",
            effect: "Auto-fix issues with confirmation",
        },
        Flag {
            name: "--silent",
            effect: "No output unless issues found (for SessionStart hook)",
        },
        Flag {
            name: "--quiet",
            effect: "One-line summary only (for SessionStart hook)",
        },
        Flag {
            name: "--summary",
            effect: "Brief checklist of results",
        },
    ],
    flag_layout: FlagLayout::List,
    details: &[
        Detail::Flags,
        Detail::Bullets {
            label: "Checks",
            items: &[
                &[Text("Directory structure exists and is complete")],
                &[Text("JSON files are valid")],
                &[Text("Role guides exist and are populated")],
                &[Text("Reference integrity (roles, documents, templates)")],
                &[Text("Cross-references between files")],
            ],
        },
    ],
};

const SYNC_TEMPLATE: CommandEntry = CommandEntry {
    name: "/sync-template",
    args: "[flags]",
    scoped: true,
    purpose: "Synchronize template updates while preserving customizations",
    summary: "Synchronize template updates",
    flags: &[
        Flag {
            name: "--check-only",
            effect: "Check for updates without applying (for SessionStart hook)",
        },
        Flag {
            name: "--quiet",
            effect: "Minimal output with check-only",
        },
        Flag {
            name: "--preview",
            effect: "Show changes without applying",
        },
        Flag {
            name: "--force",
            effect: "Force update check even if recently checked",
        },
    ],
    flag_layout: FlagLayout::List,
    details: &[
        Detail::Flags,
        Detail::Bullets {
            label: "What it does",
            items: &[
                &[Text("Compares your template version with registry")],
                &[Text("Analyzes differences (new files, updates, conflicts)")],
                &[Text("Creates automatic backup before changes")],
                &[Text("Performs intelligent three-way merge")],
                &[Text("Handles conflicts with user input")],
                &[Text("Generates detailed migration report")],
            ],
        },
    ],
};

const CREATE_ROLE_GUIDE: CommandEntry = CommandEntry {
    name: "/create-role-guide",
    args: "[role-name]",
    scoped: false,
    purpose: "Create custom role guides following organizational patterns",
    summary: "Create custom role guide",
    flags: &[],
    flag_layout: FlagLayout::Inline,
    details: &[Detail::Text(&[Text(
        "Invokes the Role Guide Generator agent to create a comprehensive role guide.",
    )])],
};

const TEMPLATE_SETUP_ASSISTANT: AgentEntry = AgentEntry {
    name: "Template Setup Assistant",
    invoked_by: "/init-org-template",
    invoked_args: "",
    purpose: "Guide users through template selection and setup",
    summary: "Guide template selection and setup",
    details: &[Detail::Bullets {
        label: "Capabilities",
        items: &[
            &[Text("Analyzes current directory structure")],
            &[Text("Loads available templates from plugin's templates/ directory")],
            &[Text("Presents template options with recommendations")],
            &[Text("Asks clarifying questions about organization size and stage")],
            &[Text("Applies selected template with user confirmation")],
            &[Text("Guides user to next steps (/set-role)")],
        ],
    }],
};

const ROLE_GUIDE_GENERATOR: AgentEntry = AgentEntry {
    name: "Role Guide Generator",
    invoked_by: "/create-role-guide",
    invoked_args: "[role-name]",
    purpose: "Create custom role guides following established patterns",
    summary: "Create custom role guides",
    details: &[Detail::Bullets {
        label: "What it creates",
        items: &[
            &[Text("Role overview and responsibilities")],
            &[Text("Deterministic behaviors (AI MUST follow)")],
            &[Text("Agentic opportunities (AI SHOULD suggest)")],
            &[Text("Common workflows and example scenarios")],
            &[Text("Document references")],
            &[Text("Integration with other roles")],
        ],
    }],
};

const DOCUMENT_GENERATOR: AgentEntry = AgentEntry {
    name: "Document Generator",
    invoked_by: "/generate-document",
    invoked_args: "",
    purpose: "Generate high-quality organizational documents from templates",
    summary: "Generate organizational documents",
    details: &[Detail::Bullets {
        label: "Capabilities",
        items: &[
            &[Text("Reads user's role and role guide")],
            &[Text("Accesses bundled document templates")],
            &[Text("Understands organizational context and level")],
            &[Text("Asks document-specific questions")],
            &[Text("Generates documents with appropriate structure")],
            &[Text("Places documents in correct location")],
            &[Text("Updates cross-references")],
        ],
    }],
};

const FRAMEWORK_VALIDATOR: AgentEntry = AgentEntry {
    name: "Framework Validator",
    invoked_by: "/validate-setup",
    invoked_args: "",
    purpose: "Comprehensive validation of .claude directory setup",
    summary: "Validate .claude directory setup",
    details: &[
        Detail::Bullets {
            label: "Special Modes",
            items: &[
                &[
                    Strong("First-Run Mode:"),
                    Text(" Detects missing .claude, offers initialization"),
                ],
                &[
                    Strong("Silent Mode (--silent):"),
                    Text(" No output unless issues found"),
                ],
                &[
                    Strong("Quiet Mode (--quiet):"),
                    Text(" One-line summary only"),
                ],
                &[Strong("Summary Mode (--summary):"), Text(" Brief checklist")],
            ],
        },
        Detail::Labeled {
            label: "Validation Checks",
            text: &[Text(
                "Critical (directory exists, JSON valid), Important (multiple roles, current role valid), Quality (documents exist, no broken references)",
            )],
        },
    ],
};

const TEMPLATE_SYNC: AgentEntry = AgentEntry {
    name: "Template Sync",
    invoked_by: "/sync-template",
    invoked_args: "",
    purpose: "Intelligent template synchronization with customization preservation",
    summary: "Synchronize template updates",
    details: &[Detail::Bullets {
        label: "Capabilities",
        items: &[
            &[Text("Version detection (compares current vs latest)")],
            &[Text("Difference analysis (file-level and content-level diffs)")],
            &[Text(
                "Change categorization (safe to auto-apply, merge required, conflict, preserve)",
            )],
            &[Text("Backup creation (timestamped backup before changes)")],
            &[Text("Intelligent merge (three-way merge, additive merge)")],
            &[Text("Conflict resolution (presents options to user)")],
            &[Text("Update tracking and validation")],
        ],
    }],
};

const HIERARCHY: &str = "\
┌─────────────────────────────────────────────┐
│  1. Project Config (./.claude/)             │  ← Highest Priority
│     - Project-specific settings             │
│     - Team standards                        │
│     - Overrides global config               │
├─────────────────────────────────────────────┤
│  2. Global Config (~/.claude/)              │  ← Fallback
│     - Your personal defaults                │
│     - Applies when no project override      │
│     - Cross-project consistency             │
├─────────────────────────────────────────────┤
│  3. Plugin Defaults (bundled templates/)    │  ← Last Resort
│     - Built-in templates                    │
│     - Used during initial setup             │
└─────────────────────────────────────────────┘";

/// The Role Context Manager cheatsheet
pub static CATALOG: Catalog = Catalog {
    plugin: "Role Context Manager",
    version: "1.3.0",
    description: "Role-based document context manager for Claude Code",
    phases: &[
        Phase {
            id: SectionId::Setup,
            when_to_use: "First-time user or new project initialization",
            commands: &[
                INIT_ORG_TEMPLATE,
                SETUP_PLUGIN_HOOKS,
                SET_ROLE,
                SET_ORG_LEVEL,
            ],
            agents: &[TEMPLATE_SETUP_ASSISTANT],
        },
        Phase {
            id: SectionId::Configuration,
            when_to_use: "Setting up or adjusting your role and preferences",
            commands: &[SHOW_ROLE_CONTEXT, UPDATE_ROLE_DOCS, INIT_ROLE_DOCS],
            agents: &[ROLE_GUIDE_GENERATOR],
        },
        Phase {
            id: SectionId::Daily,
            when_to_use: "Working on projects with established configuration",
            commands: &[GENERATE_DOCUMENT],
            agents: &[DOCUMENT_GENERATOR],
        },
        Phase {
            id: SectionId::Maintenance,
            when_to_use: "Validating setup, syncing updates, troubleshooting",
            commands: &[VALIDATE_SETUP, SYNC_TEMPLATE, CREATE_ROLE_GUIDE],
            agents: &[FRAMEWORK_VALIDATOR, TEMPLATE_SYNC],
        },
    ],
    scope: ScopeSection {
        subtitle: "How Scope Affects Your Reference Files",
        intro: "Scope determines where your configuration is stored and which settings take precedence.",
        table_title: "The Three Scopes",
        rows: &[
            ScopeRow {
                scope: "Global",
                location: Code("~/.claude/"),
                purpose: "Personal defaults that apply across all projects",
                when_to_use: "You want consistent role and document settings everywhere",
            },
            ScopeRow {
                scope: "Project",
                location: Code("./.claude/"),
                purpose: "Project-specific configuration that overrides global defaults",
                when_to_use: "Your team has standardized roles and documents for a project",
            },
            ScopeRow {
                scope: "Auto",
                location: Text("(Dynamic)"),
                purpose: "Automatically chooses project or global based on context",
                when_to_use: "You want smart defaults without thinking about scope",
            },
        ],
        hierarchy_title: "Configuration Hierarchy",
        hierarchy: HIERARCHY,
        key_concept: "Project configuration ALWAYS overrides global configuration when both exist. This allows teams to enforce standards while letting individuals maintain personal preferences elsewhere.",
    },
    reference: ReferenceSection {
        command_order: &[
            "/init-org-template",
            "/setup-plugin-hooks",
            "/set-role",
            "/set-org-level",
            "/show-role-context",
            "/update-role-docs",
            "/init-role-docs",
            "/generate-document",
            "/create-role-guide",
            "/validate-setup",
            "/sync-template",
        ],
        config_files: &[
            ReferenceRow {
                label: "preferences.json",
                description: "User preferences",
                detail: "Current role, auto_update_templates, applied_template info",
            },
            ReferenceRow {
                label: "role-references.json",
                description: "Team defaults",
                detail: "Default document references per role",
            },
            ReferenceRow {
                label: "role-references.local.json",
                description: "Personal customizations",
                detail: "User-specific document additions/removals (gitignored)",
            },
            ReferenceRow {
                label: "organizational-level.json",
                description: "Org level tracking",
                detail: "Current organizational level (company/system/product/project)",
            },
            ReferenceRow {
                label: "settings.json",
                description: "Hook configuration",
                detail: "SessionStart hook commands",
            },
        ],
    },
    patterns: &[
        Pattern {
            title: "Pattern 1: Individual Developer (Global Only)",
            language: "bash",
            code: "/init-org-template --global\n/set-role software-engineer --global\n# Works everywhere automatically",
        },
        Pattern {
            title: "Pattern 2: Team Project (Project Only)",
            language: "bash",
            code: "cd team-project\n/init-org-template --project\n/set-role qa-engineer --project\ngit add .claude/\ngit commit -m \"Add team configuration\"",
        },
        Pattern {
            title: "Pattern 3: Hybrid (Recommended)",
            language: "bash",
            code: "# Global defaults for personal work\n/set-role software-engineer --global\n\n# Override for specific projects\ncd special-project\n/set-role devops-engineer --project",
        },
    ],
    hooks: HookSection {
        purpose: "Automatic validation and update checks when starting a new session",
        settings_path: ".claude/settings.json",
        event: "SessionStart",
        commands: &[
            HookCommand {
                command: "/validate-setup --quiet",
                effect: "Validates setup, shows one-line summary",
            },
            HookCommand {
                command: "/sync-template --check-only",
                effect: "Checks for updates (respects auto_update_templates preference)",
            },
        ],
        outcomes: &[
            HookOutcome {
                label: "Success",
                output: "✓ Setup valid\n✓ Template up-to-date (software-org v1.0.0)",
            },
            HookOutcome {
                label: "Issues detected",
                output: "⚠ Setup incomplete - run /init-org-template to initialize\nℹ Template update available (v1.0.0 → v1.1.0). Run /sync-template to update.",
            },
        ],
    },
    footer: &[
        FooterLine {
            label: "For more information",
            text: "Visit the plugin repository or check the documentation in your .claude/docs/ directory.",
        },
        FooterLine {
            label: "Generated with",
            text: "Claude Code • Role Context Manager Plugin v1.3.0",
        },
    ],
};
