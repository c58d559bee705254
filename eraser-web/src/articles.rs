use eraser_client::api::ContentId;

#[derive(Debug, Eq, PartialEq)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Debug, Eq, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub table: Option<Table>,
}

/// A long-form blog article, rendered by `pages::ArticlePage`
#[derive(Debug, Eq, PartialEq)]
pub struct Article {
    /// Url segment, also used as the id of the article's comment thread
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub published: &'static str,
    pub read_minutes: u32,
    pub hero_image: &'static str,
    pub hero_alt: &'static str,
    pub sections: &'static [Section],
}

impl Article {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn content_id(&self) -> ContentId {
        ContentId::from(self.slug)
    }
}

pub fn find(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

pub static ARTICLES: &[Article] = &[
    Article {
        slug: "nist-800-88-explained",
        title: "NIST 800-88 Explained: Clear, Purge and Destroy",
        description: "What the NIST SP 800-88 media sanitization guidelines actually require, \
            and how to pick the right method for every drive you retire.",
        keywords: &["NIST 800-88", "media sanitization", "data erasure", "purge"],
        published: "2024-02-12",
        read_minutes: 8,
        hero_image: "/assets/blog/nist-800-88.webp",
        hero_alt: "Stack of hard drives waiting for sanitization",
        sections: &[
            Section {
                heading: "Why a standard matters",
                paragraphs: &[
                    "Deleting files or formatting a drive only removes the pointers to the data. \
                     The data itself stays on the media until it is overwritten, and recovery \
                     tools can bring it back in minutes.",
                    "NIST SP 800-88 gives organisations a shared vocabulary for sanitization, \
                     so that auditors, IT teams and disposal vendors agree on what \"erased\" means.",
                ],
                table: None,
            },
            Section {
                heading: "The three sanitization levels",
                paragraphs: &[
                    "The guideline defines three levels of effort, chosen according to the \
                     confidentiality of the data and where the media goes next.",
                ],
                table: Some(Table {
                    headers: &["Level", "What it does", "Typical use"],
                    rows: &[
                        &[
                            "Clear",
                            "Overwrites user-addressable storage with non-sensitive data",
                            "Reuse inside the organisation",
                        ],
                        &[
                            "Purge",
                            "Uses firmware commands or cryptographic erase to defeat lab recovery",
                            "Resale, leasing returns, donation",
                        ],
                        &[
                            "Destroy",
                            "Shreds, disintegrates or incinerates the media",
                            "Damaged drives, top-secret data",
                        ],
                    ],
                }),
            },
            Section {
                heading: "Proving it happened",
                paragraphs: &[
                    "Every sanitization should produce a certificate recording the device, \
                     the method, the operator and the verification result. Eraser generates \
                     tamper-evident certificates automatically for every wipe.",
                ],
                table: None,
            },
        ],
    },
    Article {
        slug: "erasing-ssds-safely",
        title: "How to Erase SSDs Safely",
        description: "Overwriting does not work the same way on flash storage. Learn why, and \
            which commands really sanitize an SSD.",
        keywords: &["SSD erasure", "secure erase", "crypto erase", "flash storage"],
        published: "2024-03-04",
        read_minutes: 6,
        hero_image: "/assets/blog/ssd-erasure.webp",
        hero_alt: "NVMe solid state drive on a workbench",
        sections: &[
            Section {
                heading: "Wear levelling hides your data",
                paragraphs: &[
                    "SSD controllers spread writes across spare blocks to extend the life of \
                     the flash cells. A software overwrite therefore never reaches every cell \
                     that once held your data.",
                ],
                table: None,
            },
            Section {
                heading: "Commands that work",
                paragraphs: &[
                    "Modern drives expose sanitize commands in firmware. Eraser detects which \
                     ones a drive supports and verifies the result afterwards.",
                ],
                table: Some(Table {
                    headers: &["Interface", "Command", "Effect"],
                    rows: &[
                        &["SATA", "SECURITY ERASE UNIT", "Resets all user blocks"],
                        &["SATA", "SANITIZE BLOCK ERASE", "Erases every block, including spares"],
                        &["NVMe", "Format NVM (SES=2)", "Cryptographic erase of the namespace"],
                        &["NVMe", "Sanitize", "Block, crypto or overwrite sanitize of the whole device"],
                    ],
                }),
            },
        ],
    },
    Article {
        slug: "gdpr-right-to-erasure",
        title: "GDPR and the Right to Erasure",
        description: "Article 17 gives people the right to have their data erased. Here is what \
            that means for the hardware your data lives on.",
        keywords: &["GDPR", "right to erasure", "article 17", "compliance"],
        published: "2024-04-18",
        read_minutes: 7,
        hero_image: "/assets/blog/gdpr-erasure.webp",
        hero_alt: "Compliance officer reviewing an erasure certificate",
        sections: &[
            Section {
                heading: "Erasure does not stop at the database",
                paragraphs: &[
                    "Backups, replaced laptops and decommissioned servers all hold copies of \
                     personal data. Retiring that hardware without sanitizing it leaves the \
                     organisation exposed long after the record was deleted.",
                ],
                table: None,
            },
            Section {
                heading: "Documenting compliance",
                paragraphs: &[
                    "Regulators expect evidence. An audit trail tying each retired asset to a \
                     verified erasure report is the simplest way to demonstrate accountability.",
                ],
                table: Some(Table {
                    headers: &["Asset", "Risk if not erased", "Recommended method"],
                    rows: &[
                        &["Laptops", "Cached mailboxes and documents", "Purge, with certificate"],
                        &["Servers", "Full customer databases", "Purge, verified per drive"],
                        &["Mobile phones", "Contacts, messages, tokens", "Crypto erase and factory reset"],
                    ],
                }),
            },
        ],
    },
    Article {
        slug: "degaussing-vs-software-wiping",
        title: "Degaussing vs. Software Wiping",
        description: "Degaussers destroy drives, software wiping lets you reuse them. A side by \
            side comparison of cost, security and sustainability.",
        keywords: &["degaussing", "disk wiping", "e-waste", "IT asset disposition"],
        published: "2024-05-27",
        read_minutes: 5,
        hero_image: "/assets/blog/degaussing.webp",
        hero_alt: "Industrial degausser next to a rack of servers",
        sections: &[Section {
            heading: "Comparing the two approaches",
            paragraphs: &[
                "Degaussing scrambles the magnetic domains of a hard drive and leaves it unusable. \
                 It does nothing to flash media. Software wiping keeps the device sellable and \
                 works on every storage technology when the right commands are used.",
            ],
            table: Some(Table {
                headers: &["", "Degaussing", "Software wiping"],
                rows: &[
                    &["Works on SSDs", "No", "Yes"],
                    &["Drive reusable", "No", "Yes"],
                    &["Per-drive report", "Manual", "Automatic"],
                    &["Environmental impact", "Drive becomes e-waste", "Drive is resold"],
                ],
            }),
        }],
    },
];
