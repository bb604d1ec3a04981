//! The static content catalog for the about page.
//!
//! Three sections, each with a human-readable preview and a
//! machine-readable JSON code block. Authored here, embedded at compile
//! time, and never mutated at runtime. The page takes the catalog by
//! reference; nothing else reaches for it.

/// One content block on the about page.
///
/// `title` doubles as a stable key, so it must be unique within the
/// catalog. `preview` and `code` are rendered verbatim, line breaks and
/// all; `code` is also what the copy button puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub preview: &'static str,
    pub code: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "About Me",
        preview: "I'm Andrew C. Young, a web developer and cybersecurity enthusiast.

\u{1f680} Passionate about building modern web applications and securing digital assets.
\u{1f4cd} Currently studying Computer Science at UCF.
\u{1f510} Learning cybersecurity and CompTIA certifications.",
        code: r#"{
  "name": "Andrew C. Young",
  "role": "Web Developer & Cybersecurity Enthusiast",
  "passions": [
    "Building modern web applications",
    "Securing digital assets"
  ],
  "education": "Computer Science at UCF",
  "learning": ["Cybersecurity", "CompTIA Certifications"]
}"#,
    },
    Section {
        title: "Tech Stack",
        preview: "Frontend: React, TypeScript, Tailwind CSS, Next.js
Backend: Node.js, Express, MongoDB
Tools: Vite, GitHub Actions, Docker
Cybersecurity: Linux, Networking, C, Python",
        code: r#"{
  "frontend": ["React", "TypeScript", "Tailwind CSS", "Next.js"],
  "backend": ["Node.js", "Express", "MongoDB"],
  "tools": ["Vite", "GitHub Actions", "Docker"],
  "cybersecurity": ["Linux", "Networking", "C", "Python"]
}"#,
    },
    Section {
        title: "Contact",
        preview: "\u{1f4e7} Email: contact@andrewcwhy.me
\u{1f310} Website: [andrewcwhy.me](https://andrewcwhy.me)
\u{1f419} GitHub: [acy2k5](https://github.com/acy2k5)",
        code: r#"{
  "email": "contact@andrewcwhy.me",
  "website": "https://andrewcwhy.me",
  "github": "https://github.com/acy2k5"
}"#,
    },
];

/// The fixed, ordered catalog of sections.
pub fn sections() -> &'static [Section] {
    SECTIONS
}
