//! DVB-C: one region per country, one network per cable operator.

use super::*;

pub(super) static REGIONS: &[RegionTable] = &[
    RegionTable {
        name: "Austria",
        code: Some("AT"),
        networks: &[NetworkTable {
            name: "UPC Wien",
            muxes: &[
                c(130000000, 6900000, FEC_NONE, QAM256),
                c(138000000, 6900000, FEC_NONE, QAM256),
                c(362000000, 6900000, FEC_NONE, QAM256),
                c(370000000, 6900000, FEC_NONE, QAM256),
                c(378000000, 6900000, FEC_NONE, QAM256),
            ],
        }],
    },
    RegionTable {
        name: "Finland",
        code: Some("FI"),
        networks: &[
            NetworkTable {
                name: "Welho",
                muxes: &[
                    c(154000000, 6900000, FEC_NONE, QAM128),
                    c(162000000, 6900000, FEC_NONE, QAM128),
                    c(170000000, 6900000, FEC_NONE, QAM128),
                    c(218000000, 6900000, FEC_NONE, QAM128),
                    c(226000000, 6900000, FEC_NONE, QAM128),
                    c(162000000, 6900000, FEC_NONE, QAM128),
                    c(282000000, 6900000, FEC_NONE, QAM256),
                ],
            },
            NetworkTable {
                name: "Turku",
                muxes: &[
                    c(146000000, 6900000, FEC_NONE, QAM128),
                    c(154000000, 6900000, FEC_NONE, QAM128),
                    c(162000000, 6900000, FEC_NONE, QAM128),
                ],
            },
        ],
    },
    RegionTable {
        name: "Germany",
        code: Some("DE"),
        networks: &[
            NetworkTable {
                name: "Kabel Deutschland",
                muxes: &[
                    c(113000000, 6900000, FEC_NONE, QAM64),
                    c(121000000, 6900000, FEC_NONE, QAM64),
                    c(330000000, 6900000, FEC_NONE, QAM64),
                    c(338000000, 6900000, FEC_NONE, QAM64),
                    c(346000000, 6900000, FEC_NONE, QAM64),
                    c(354000000, 6900000, FEC_NONE, QAM64),
                    c(362000000, 6900000, FEC_NONE, QAM64),
                    c(370000000, 6900000, FEC_NONE, QAM64),
                    c(394000000, 6900000, FEC_NONE, QAM64),
                    c(410000000, 6900000, FEC_NONE, QAM256),
                    c(418000000, 6900000, FEC_NONE, QAM256),
                    c(426000000, 6900000, FEC_NONE, QAM256),
                ],
            },
            NetworkTable {
                name: "Unitymedia",
                muxes: &[
                    c(450000000, 6900000, FEC_NONE, QAM256),
                    c(458000000, 6900000, FEC_NONE, QAM256),
                    c(466000000, 6900000, FEC_NONE, QAM256),
                    c(474000000, 6900000, FEC_NONE, QAM256),
                    c(538000000, 6900000, FEC_NONE, QAM64),
                    c(546000000, 6900000, FEC_NONE, QAM64),
                ],
            },
        ],
    },
    RegionTable {
        name: "Netherlands",
        code: Some("NL"),
        networks: &[
            NetworkTable {
                name: "Ziggo",
                muxes: &[
                    c(372000000, 6875000, FEC_NONE, QAM64),
                    c(380000000, 6875000, FEC_NONE, QAM64),
                    c(388000000, 6875000, FEC_NONE, QAM64),
                    c(396000000, 6875000, FEC_NONE, QAM64),
                    c(404000000, 6875000, FEC_NONE, QAM64),
                    c(474000000, 6875000, FEC_NONE, QAM256),
                    c(482000000, 6875000, FEC_NONE, QAM256),
                ],
            },
            NetworkTable {
                name: "Caiway",
                muxes: &[
                    c(322000000, 6875000, FEC_AUTO, QAM_AUTO),
                    c(330000000, 6875000, FEC_AUTO, QAM_AUTO),
                ],
            },
        ],
    },
    RegionTable {
        name: "Sweden",
        code: Some("SE"),
        networks: &[NetworkTable {
            name: "Com Hem",
            muxes: &[
                c(290000000, 6875000, FEC_NONE, QAM64),
                c(298000000, 6875000, FEC_NONE, QAM64),
                c(306000000, 6875000, FEC_NONE, QAM64),
                c(314000000, 6875000, FEC_NONE, QAM64),
                c(362000000, 6875000, FEC_NONE, QAM256),
                c(370000000, 6875000, FEC_NONE, QAM256),
            ],
        }],
    },
    RegionTable {
        name: "Switzerland",
        code: Some("CH"),
        networks: &[NetworkTable {
            name: "Cablecom",
            muxes: &[
                c(410000000, 6900000, FEC_NONE, QAM256),
                c(418000000, 6900000, FEC_NONE, QAM256),
                c(426000000, 6900000, FEC_NONE, QAM256),
                c(442000000, 6900000, FEC_NONE, QAM256),
                c(450000000, 6900000, FEC_NONE, QAM256),
            ],
        }],
    },
];
