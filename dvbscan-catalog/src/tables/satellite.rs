//! DVB-S: one umbrella region, one network per orbital slot.
//! Frequencies are transponder frequencies in kHz.

use super::*;

pub(super) static REGIONS: &[RegionTable] = &[RegionTable {
    name: "Geosynchronous Orbit",
    code: None,
    networks: &[
        NetworkTable {
            name: "Astra-19.2E",
            muxes: &[s(12551500, V, 22000000, FEC_5_6)],
        },
        NetworkTable {
            name: "Astra-23.5E",
            muxes: &[
                s(11778000, V, 27500000, FEC_3_4),
                s(11817000, V, 27500000, FEC_3_4),
                s(12525000, V, 27500000, FEC_3_4),
                s(12565000, H, 27500000, FEC_2_3),
            ],
        },
        NetworkTable {
            name: "Astra-28.2E",
            muxes: &[
                s(10714250, H, 22000000, FEC_5_6),
                s(10729000, V, 22000000, FEC_5_6),
                s(10744250, H, 22000000, FEC_5_6),
                s(10758500, V, 22000000, FEC_5_6),
                s(10773250, H, 22000000, FEC_5_6),
                s(10788000, V, 22000000, FEC_5_6),
                s(10803250, H, 22000000, FEC_5_6),
                s(10818000, V, 22000000, FEC_5_6),
                s(10832250, H, 22000000, FEC_5_6),
                s(10847000, V, 22000000, FEC_5_6),
                s(10862250, H, 22000000, FEC_5_6),
                s(10876750, V, 22000000, FEC_5_6),
                s(10891750, H, 22000000, FEC_5_6),
                s(10906500, V, 22000000, FEC_5_6),
                s(11426500, H, 27500000, FEC_2_3),
                s(11426500, H, 27500000, FEC_2_3),
                s(11464250, H, 22000000, FEC_5_6),
                s(11778000, V, 27500000, FEC_2_3),
                s(12402000, V, 27500000, FEC_2_3),
            ],
        },
        NetworkTable {
            name: "Eutelsat-9.0E",
            muxes: &[
                s(11727480, V, 27500000, FEC_3_4),
                s(11766840, V, 27500000, FEC_3_4),
                s(11843600, V, 27500000, FEC_3_4),
                s(12111000, V, 27500000, FEC_3_4),
            ],
        },
        NetworkTable {
            name: "Hotbird-13.0E",
            muxes: &[
                s(10719000, V, 27500000, FEC_3_4),
                s(10834000, V, 27500000, FEC_3_4),
                s(11034000, V, 27500000, FEC_3_4),
                s(11137000, H, 27500000, FEC_3_4),
                s(11200000, V, 27500000, FEC_5_6),
                s(11219000, H, 27500000, FEC_3_4),
                s(11296000, H, 27500000, FEC_3_4),
                s(11334000, H, 27500000, FEC_3_4),
                s(11373000, H, 27500000, FEC_3_4),
                s(11470000, V, 27500000, FEC_5_6),
                s(11541000, V, 22000000, FEC_5_6),
                s(11604000, H, 27500000, FEC_5_6),
                s(11662000, V, 27500000, FEC_3_4),
                s(11727000, V, 27500000, FEC_3_4),
                s(11766000, H, 27500000, FEC_2_3),
                s(11804000, V, 27500000, FEC_2_3),
                s(11919000, V, 27500000, FEC_2_3),
                s(12015000, H, 27500000, FEC_3_4),
                s(12111000, V, 27500000, FEC_3_4),
                s(12169000, H, 27500000, FEC_3_4),
                s(12380000, V, 27500000, FEC_3_4),
                s(12539000, H, 27500000, FEC_3_4),
                s(12597000, V, 27500000, FEC_3_4),
            ],
        },
        NetworkTable {
            name: "Sirius-5.0E",
            muxes: &[
                s(11727000, H, 27500000, FEC_3_4),
                s(11766000, H, 27500000, FEC_3_4),
                s(11843000, H, 27500000, FEC_3_4),
                s(12035000, H, 27500000, FEC_3_4),
                s(12380000, V, 27500000, FEC_3_4),
            ],
        },
        NetworkTable {
            name: "Thor-1.0W",
            muxes: &[
                s(11247000, V, 24500000, FEC_7_8),
                s(11325000, H, 24500000, FEC_7_8),
                s(12015000, H, 28000000, FEC_7_8),
                s(12130000, V, 28000000, FEC_7_8),
                s(12188000, V, 28000000, FEC_7_8),
                s(12303000, V, 28000000, FEC_7_8),
            ],
        },
        NetworkTable {
            name: "Telstar12-15.0W",
            muxes: &[
                s(12041000, H, 3256000, FEC_2_3),
                s(12520000, V, 8700000, FEC_1_2),
                s(12564000, V, 3255000, FEC_3_4),
            ],
        },
        NetworkTable {
            name: "Hispasat-30.0W",
            muxes: &[
                s(11539000, V, 24500000, FEC_5_6),
                s(11931000, H, 27500000, FEC_3_4),
                s(12015000, V, 27500000, FEC_3_4),
                s(12092000, V, 27500000, FEC_3_4),
                s(12092000, V, 27500000, FEC_AUTO),
            ],
        },
    ],
}];
