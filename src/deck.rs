use crate::constants::*;
use crate::error::Result;
use crate::registry::SlideRegistry;
use crate::slide::*;

/// The explainer deck, in presentation order.
pub fn pldm_deck() -> Result<SlideRegistry<Slide>> {
    SlideRegistry::new(vec![
        title_slide(),
        intro_slide(),
        base_terminology_slide(),
        key_roles_slide(),
        concept_map_slide(),
    ])
}

fn title_slide() -> Slide {
    Slide::new(
        "The PLDM Firmware Update Process",
        vec![
            Block::Subtitle("An Explainer"),
            Block::Title("The PLDM Firmware Update Process"),
            Block::Caption("Based on DMTF Specification DSP0267"),
        ],
    )
}

fn intro_slide() -> Slide {
    Slide::new(
        "What is PLDM?",
        vec![
            Block::Title("What is PLDM?"),
            Block::Bullets(vec![
                "PLDM stands for Platform Level Data Model. It's a suite of specifications defined by the DMTF (Distributed Management Task Force).",
                "It provides a standardized way for system components to communicate for management tasks like inventory, monitoring, and control.",
                "PLDM for Firmware Update (DSP0267) specifically defines a robust protocol for updating firmware on compliant devices, ensuring interoperability between different vendors.",
            ]),
        ],
    )
}

fn base_terminology_slide() -> Slide {
    Slide::new(
        "PLDM Base Terminology",
        vec![
            Block::Title("PLDM Base Terminology"),
            Block::Subtitle("The building blocks of PLDM communication."),
            Block::Exchange(Exchange {
                requester: Party {
                    name: "Requester",
                    example: "(e.g., Update Agent)",
                    fill: ACCENT_DEEP,
                    accent: ACCENT,
                },
                responder: Party {
                    name: "Responder",
                    example: "(e.g., Firmware Device)",
                    fill: INDIGO_DEEP,
                    accent: INDIGO,
                },
                request: Message {
                    caption: "PLDM Request Message ->",
                    fields: vec!["Header", "Cmd Code", "PLDM Message Payload"],
                    color: ACCENT,
                    highlight: None,
                },
                response: Message {
                    caption: "<- PLDM Response Message",
                    fields: vec!["Header", "Completion Code", "PLDM Message Payload"],
                    color: AMBER,
                    highlight: Some(1),
                },
            }),
            Block::Definitions(vec![
                Definition {
                    term: "PLDM Terminus",
                    text: "An endpoint in PLDM communication that sends and/or receives messages.",
                    wide: false,
                },
                Definition {
                    term: "PLDM Message",
                    text: "The fundamental unit of communication, composed of a request or a response.",
                    wide: false,
                },
                Definition {
                    term: "PLDM Request",
                    text: "A message sent to initiate an operation.",
                    wide: false,
                },
                Definition {
                    term: "PLDM Response",
                    text: "A message sent back, which includes a Completion Code to indicate the outcome.",
                    wide: false,
                },
                Definition {
                    term: "PLDM Message Payload",
                    text: "Carries the actual command-specific data (in a request) or result data (in a response).",
                    wide: true,
                },
            ]),
        ],
    )
}

fn key_roles_slide() -> Slide {
    Slide::new(
        "The Key Roles",
        vec![
            Block::Title("The Key Roles"),
            Block::Roles(Roles {
                left: Role {
                    icon: Icon::Server,
                    name: "Update Agent (UA)",
                    description: "The orchestrator. Typically a management controller (like a BMC) that reads the update package and sends commands to the target device.",
                },
                link: "PLDM Commands",
                right: Role {
                    icon: Icon::Chip,
                    name: "Firmware Device (FD)",
                    description: "The target. A device (e.g., a NIC, HBA, or other peripheral) that receives the firmware, verifies it, and applies the update.",
                },
            }),
        ],
    )
}

fn concept_map_slide() -> Slide {
    Slide::new(
        "Core Concepts & Terminology",
        vec![
            Block::Title("Core Concepts & Terminology"),
            Block::ConceptMap(ConceptMap {
                panels: [
                    Panel {
                        heading: "1. The Orchestrator",
                        name: "Update Agent (UA)",
                        detail: PanelDetail::Text(
                            "Initiates and manages the entire update process by reading the package and sending commands.",
                        ),
                    },
                    Panel {
                        heading: "2. The Data Source",
                        name: "Firmware Update Package",
                        detail: PanelDetail::Stack(vec![
                            ("Package Header", TEXT_SOFT),
                            ("Payload (Component Images)", TEXT_SOFT),
                        ]),
                    },
                    Panel {
                        heading: "3. The Target",
                        name: "Firmware Device (FD)",
                        detail: PanelDetail::Stack(vec![
                            ("Firmware Component", TEXT_SOFT),
                            ("Active Image", GREEN),
                            ("Pending Image", AMBER),
                        ]),
                    },
                    Panel {
                        heading: "4. The Final Step",
                        name: "Activation",
                        detail: PanelDetail::Text(
                            "The process of making the new Pending Image the Active Image, often requiring a reboot.",
                        ),
                    },
                ],
                steps: [
                    "UA reads Package",
                    "UA sends Component Images to FD",
                    "UA triggers Activation",
                ],
            }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_five_slides_in_order() {
        let deck = pldm_deck().unwrap();
        let titles: Vec<_> = deck.iter().map(Slide::title).collect();
        assert_eq!(
            titles,
            vec![
                "The PLDM Firmware Update Process",
                "What is PLDM?",
                "PLDM Base Terminology",
                "The Key Roles",
                "Core Concepts & Terminology",
            ]
        );
    }

    #[test]
    fn test_every_slide_has_content() {
        let deck = pldm_deck().unwrap();
        assert!(deck.iter().all(|slide| !slide.blocks().is_empty()));
    }

    #[test]
    fn test_deck_text_is_drawable_with_default_font() {
        // The built-in raylib font only carries printable ASCII
        fn ascii(text: &str) -> bool {
            text.chars().all(|c| c == ' ' || c.is_ascii_graphic())
        }

        let deck = pldm_deck().unwrap();
        for slide in deck.iter() {
            assert!(ascii(slide.title()));
            for block in slide.blocks() {
                match block {
                    Block::Title(t) | Block::Subtitle(t) | Block::Caption(t) => assert!(ascii(t)),
                    Block::Bullets(items) => assert!(items.iter().all(|t| ascii(t))),
                    Block::Definitions(entries) => {
                        assert!(entries.iter().all(|e| ascii(e.term) && ascii(e.text)))
                    }
                    Block::Exchange(x) => {
                        assert!(ascii(x.request.caption) && ascii(x.response.caption))
                    }
                    Block::Roles(r) => assert!(ascii(r.left.description) && ascii(r.right.description)),
                    Block::ConceptMap(m) => assert!(m.steps.iter().all(|t| ascii(t))),
                }
            }
        }
    }
}
