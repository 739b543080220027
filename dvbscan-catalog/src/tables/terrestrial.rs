//! DVB-T: one region per country, one network per transmitter site.

use super::*;

pub(super) static REGIONS: &[RegionTable] = &[
    RegionTable {
        name: "Australia",
        code: Some("AU"),
        networks: &[
            NetworkTable {
                name: "Sydney North Shore",
                muxes: &[
                    t(571500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(578500000, BW7, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(177500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(191625000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(219500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(177500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Melbourne",
                muxes: &[
                    t(226500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(177500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(191625000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(219500000, BW7, FEC_3_4, FEC_NONE, QAM64, TM8K, GI1_16, HIER_NONE),
                    t(536625000, BW7, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                ],
            },
        ],
    },
    RegionTable {
        name: "Finland",
        code: Some("FI"),
        networks: &[
            NetworkTable {
                name: "Espoo",
                muxes: &[
                    t(562000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(618000000, BW8, FEC_2_3, FEC_1_2, QAM64, TM8K, GI1_8, HIER_2),
                    t(658000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(674000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(690000000, BW8, FEC_AUTO, FEC_NONE, QAM_AUTO, TM8K, GI_AUTO, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Tampere",
                muxes: &[
                    t(578000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(626000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(754000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                ],
            },
        ],
    },
    RegionTable {
        name: "Germany",
        code: Some("DE"),
        networks: &[
            NetworkTable {
                name: "Berlin",
                muxes: &[
                    t(177500000, BW7, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(191500000, BW7, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(506000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(522000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(570000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(658000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(754000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Hamburg",
                muxes: &[
                    t(490000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(626000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(650000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(674000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(762000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "München",
                muxes: &[
                    t(538000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(554000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                    t(698000000, BW8, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_4, HIER_NONE),
                ],
            },
        ],
    },
    RegionTable {
        name: "Spain",
        code: Some("ES"),
        networks: &[NetworkTable {
            name: "Madrid",
            muxes: &[
                t(618000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
                t(770000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
                t(810000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
                t(834000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
                t(842000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
                t(850000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_4, HIER_NONE),
            ],
        }],
    },
    RegionTable {
        name: "Sweden",
        code: Some("SE"),
        networks: &[
            NetworkTable {
                name: "Stockholm Nacka",
                muxes: &[
                    t(482000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(498000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(514000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(522000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(546000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(570000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Göteborg",
                muxes: &[
                    t(490000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(538000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(554000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(578000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Malmö",
                muxes: &[
                    t(506000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(530000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(594000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                    t(642000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM8K, GI1_8, HIER_NONE),
                ],
            },
        ],
    },
    RegionTable {
        name: "Taiwan",
        code: Some("TW"),
        networks: &[NetworkTable {
            name: "Taipei",
            muxes: &[
                t(533000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
                t(545000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
                t(557000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
                t(569000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
                t(581000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
                t(593000000, BW6, FEC_2_3, FEC_NONE, QAM16, TM8K, GI1_8, HIER_NONE),
            ],
        }],
    },
    RegionTable {
        name: "United Kingdom",
        code: Some("GB"),
        networks: &[
            NetworkTable {
                name: "Black Hill",
                muxes: &[
                    t(698166667, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(722166667, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(690000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(714000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(738000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(754000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Crystal Palace",
                muxes: &[
                    t(505833333, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(481833333, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(529833333, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(561833333, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(537833333, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(578000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Dover",
                muxes: &[
                    t(850000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(842000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(834000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(826000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(818000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(810000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Emley Moor",
                muxes: &[
                    t(722166667, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(690000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(698166667, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(714000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(738000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(754166667, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Sutton Coldfield",
                muxes: &[
                    t(618000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(642000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(666000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(634000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(658000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(682000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
            NetworkTable {
                name: "Winter Hill",
                muxes: &[
                    t(754166667, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(834000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(850000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(842000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                    t(818000000, BW8, FEC_2_3, FEC_NONE, QAM64, TM2K, GI1_32, HIER_NONE),
                    t(810000000, BW8, FEC_3_4, FEC_NONE, QAM16, TM2K, GI1_32, HIER_NONE),
                ],
            },
        ],
    },
];
