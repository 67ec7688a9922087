//! Built-in template tables.
//!
//! Every entry is a literal; `{project_name}` is the only placeholder and is
//! substituted by the renderer at write time.

use super::TemplateSet;
use crate::types::ProjectType;

/// Files written for every project type
pub const COMMON_FILES: &[(&str, &str)] = &[
    ("README.md", "# {project_name}\n\nA new project.\n"),
    (".gitignore", COMMON_GITIGNORE),
];

const COMMON_GITIGNORE: &str = "# Ignore Python artifacts\n__pycache__/\n*.pyc\n\n# Ignore OS-specific files\n.DS_Store\n\n# Ignore temporary files\ncommit_message.txt\n\n# Ignore environment variables\n.env\n";

const PYPROJECT_TOML: &str = "[project]\nname = \"{project_name}\"\nversion = \"0.1.0\"\n";

const PYTHON: TemplateSet = TemplateSet {
    directories: &["src", "tests"],
    files: &[
        (
            "src/main.py",
            "def main():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    main()\n",
        ),
        (
            "tests/test_main.py",
            "import unittest\n\nclass TestMain(unittest.TestCase):\n    def test_example(self):\n        self.assertEqual(1, 1)\n\nif __name__ == \"__main__\":\n    unittest.main()\n",
        ),
        ("pyproject.toml", PYPROJECT_TOML),
    ],
};

const FASTAPI: TemplateSet = TemplateSet {
    directories: &["src", "tests"],
    files: &[
        (
            "src/main.py",
            "from fastapi import FastAPI\n\napp = FastAPI()\n\n@app.get(\"/\")\ndef read_root():\n    return {\"Hello\": \"World\"}\n",
        ),
        ("requirements.txt", "fastapi\nuvicorn[standard]\n"),
    ],
};

// The .gitignore entry is overlaid by COMMON_FILES when merged.
const LLM_FINETUNE: TemplateSet = TemplateSet {
    directories: &["data", "models", "notebooks", "src"],
    files: &[
        (
            "src/train.py",
            "import torch\nfrom transformers import AutoModelForCausalLM, AutoTokenizer\n\nprint(\"Ready to train!\")\n",
        ),
        (
            "src/evaluate.py",
            "import torch\nfrom transformers import AutoModelForCausalLM, AutoTokenizer\n\nprint(\"Ready to evaluate!\")\n",
        ),
        (
            "notebooks/01_data_exploration.ipynb",
            "{\n \"cells\": [],\n \"metadata\": {},\n \"nbformat\": 4,\n \"nbformat_minor\": 2\n}",
        ),
        ("data/.gitkeep", ""),
        ("models/.gitkeep", ""),
        ("requirements.txt", "torch\ntransformers\ndatasets\naccelerate\n"),
        (
            ".gitignore",
            concat!(
                "# Ignore Python artifacts\n__pycache__/\n*.pyc\n\n# Ignore OS-specific files\n.DS_Store\n\n# Ignore temporary files\ncommit_message.txt\n\n# Ignore environment variables\n.env\n",
                "\n# Ignore large data and model files\ndata/*\nmodels/*\n"
            ),
        ),
    ],
};

const COMPILER: TemplateSet = TemplateSet {
    directories: &["src/lexer", "src/parser", "src/codegen", "tests"],
    files: &[
        (
            "src/main.py",
            "def main():\n    print(\"Compiler entry point.\")\n\nif __name__ == \"__main__\":\n    main()\n",
        ),
        ("src/lexer/lexer.py", "# Lexer implementation\n"),
        ("src/parser/parser.py", "# Parser implementation\n"),
        ("src/codegen/codegen.py", "# Code generator implementation\n"),
        ("pyproject.toml", PYPROJECT_TOML),
    ],
};

const BOOT_ASM: &str = "; A simple bootloader

org 0x7c00
bits 16

start:
    mov si, msg
    call print_string

jmp $

print_string:
    mov ah, 0x0e ; tty mode
.loop:
    lodsb
    cmp al, 0
    je .done
    int 0x10
    jmp .loop
.done:
    ret

msg db 'Hello, World!', 0

times 510 - ($ - $$) db 0
dw 0xaa55
";

// Same as LLM_FINETUNE: the .gitignore entry loses to the common one.
const OS: TemplateSet = TemplateSet {
    directories: &["src/boot", "src/kernel", "build"],
    files: &[
        ("src/boot/boot.asm", BOOT_ASM),
        (
            "src/kernel/kernel.c",
            "// A simple C kernel\n\nvoid main() {\n    // Your kernel code here\n    while(1);\n}",
        ),
        (
            "build.bat",
            "nasm -f bin src/boot/boot.asm -o build/boot.bin\nrem Add commands to compile C kernel and link here\necho \"Build complete. (Kernel not included in image yet)\"\ncopy build\\boot.bin build\\os.img\n",
        ),
        (".gitignore", "*.bin\n*.img\nbuild/*\n"),
    ],
};

const FALLBACK: TemplateSet = TemplateSet {
    directories: &[],
    files: &[],
};

/// Look up the static template set for a project type
pub fn template_set(project_type: &ProjectType) -> &'static TemplateSet {
    match project_type {
        ProjectType::Python => &PYTHON,
        ProjectType::FastApi => &FASTAPI,
        ProjectType::LlmFinetune => &LLM_FINETUNE,
        ProjectType::Compiler => &COMPILER,
        ProjectType::Os => &OS,
        ProjectType::Other(_) => &FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_sector_literal() {
        assert!(BOOT_ASM.starts_with("; A simple bootloader\n\norg 0x7c00\n"));
        assert!(BOOT_ASM.ends_with("times 510 - ($ - $$) db 0\ndw 0xaa55\n"));
    }

    #[test]
    fn test_file_parents_are_listed_directories() {
        for name in ProjectType::SUPPORTED {
            let set = template_set(&ProjectType::parse(name));
            for (path, _) in set.files {
                if let Some((parent, _)) = path.rsplit_once('/') {
                    assert!(
                        set.directories.iter().any(|dir| *dir == parent),
                        "{}: parent of {} is not in the directory list",
                        name,
                        path
                    );
                }
            }
        }
    }

    #[test]
    fn test_fallback_is_empty() {
        let set = template_set(&ProjectType::Other("react".to_string()));
        assert!(set.directories.is_empty());
        assert!(set.files.is_empty());
    }

    #[test]
    fn test_llm_gitignore_extends_common() {
        let (_, content) = LLM_FINETUNE
            .files
            .iter()
            .find(|(path, _)| *path == ".gitignore")
            .unwrap();
        assert!(content.starts_with(COMMON_GITIGNORE));
        assert!(content.ends_with("data/*\nmodels/*\n"));
    }
}
