//! Record layouts for the pre-R16 ECHI formats (versions 2 through 12)
//!
//! These formats carry a single local-time pair (SEGSTART, SEGSTOP) at fields 6 and 7.
//! The packed flag word always sits at byte 54, directly after the first five routing
//! fields, and is spliced in at field 16.
//!
//! These tables are reconstructed, not taken from the vendor's published layouts. The
//! record lengths, the field positions the corrections rely on and the version 2 shape
//! are fixed; the remaining column order follows the documented CMS call history field
//! list, with unaccounted bytes declared as trailing reserved `Skip` slots. Check a
//! table against a real capture before relying on individual column positions.

use super::{BitField, FormatDescriptor, Slot};

pub(crate) static V2: FormatDescriptor = FormatDescriptor {
    version: 2,
    record_length: 189,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U8, // packed flags
        Slot::Skip(1),
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Skip(10),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "SPLIT3", "TKGRP", "ACD",
        "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON", "ORIGREASON",
        "DISPSKLEVEL", "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER",
        "DIALED_NUM", "CALLING_PTY", "LASTDIGITS",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 8, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 30,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 34,
    string_end: None,
};

pub(crate) static V3: FormatDescriptor = FormatDescriptor {
    version: 3,
    record_length: 210,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Skip(12),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "AGT_RELEASED", "SPLIT3",
        "TKGRP", "EQ_LOCID", "ACD", "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON",
        "ORIGREASON", "DISPSKLEVEL", "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN",
        "LASTOBSERVER", "DIALED_NUM", "CALLING_PTY", "LASTDIGITS", "LASTCWC",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 9, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 32,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 36,
    string_end: None,
};

pub(crate) static V4: FormatDescriptor = FormatDescriptor {
    version: 4,
    record_length: 225,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Skip(9),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "AGT_RELEASED", "SPLIT3",
        "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID", "OBS_LOCID", "ACD", "CALL_DISP",
        "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON", "ORIGREASON", "DISPSKLEVEL", "EVENT1",
        "EVENT2", "EVENT3", "EVENT4", "EVENT5", "EVENT6", "EVENT7", "EVENT8", "EVENT9",
        "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER", "DIALED_NUM",
        "CALLING_PTY", "LASTDIGITS", "LASTCWC", "CALLING_II",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 9, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 35,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 48,
    string_end: None,
};

pub(crate) static V5: FormatDescriptor = FormatDescriptor {
    version: 5,
    record_length: 233,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Skip(15),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "AGT_RELEASED", "SPLIT3",
        "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID", "OBS_LOCID", "UUI_LEN", "ACD",
        "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON", "ORIGREASON",
        "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4", "EVENT5", "EVENT6", "EVENT7",
        "EVENT8", "EVENT9", "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN",
        "LASTOBSERVER", "DIALED_NUM", "CALLING_PTY", "LASTDIGITS", "LASTCWC", "CALLING_II",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 9, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 36,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 49,
    string_end: None,
};

pub(crate) static V11: FormatDescriptor = FormatDescriptor {
    version: 11,
    record_length: 322,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::U8, // INTERRUPTDEL
        Slot::U8, // AGENTSURPLUS
        Slot::U8, // AGENTSKILLLEVEL
        Slot::U8, // PREFSKILLLEVEL
        Slot::Text(21), // UCID
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Text(17), // CWC1
        Slot::Text(17), // CWC2
        Slot::Text(17), // CWC3
        Slot::Text(17), // CWC4
        Slot::Skip(11),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "AGT_RELEASED", "SPLIT3",
        "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID", "OBS_LOCID", "UUI_LEN", "ACD",
        "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON", "ORIGREASON",
        "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4", "EVENT5", "EVENT6", "EVENT7",
        "EVENT8", "EVENT9", "INTERRUPTDEL", "AGENTSURPLUS", "AGENTSKILLLEVEL", "PREFSKILLLEVEL",
        "UCID", "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER",
        "DIALED_NUM", "CALLING_PTY", "LASTDIGITS", "LASTCWC", "CALLING_II", "CWC1", "CWC2",
        "CWC3", "CWC4",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 9, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 36,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 53,
    string_end: None,
};

pub(crate) static V12: FormatDescriptor = FormatDescriptor {
    version: 12,
    record_length: 493,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTOP
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::U8, // INTERRUPTDEL
        Slot::U8, // AGENTSURPLUS
        Slot::U8, // AGENTSKILLLEVEL
        Slot::U8, // PREFSKILLLEVEL
        Slot::Text(21), // UCID
        Slot::Text(8), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(8), // FIRSTVDN
        Slot::Text(10), // ORIGLOGIN
        Slot::Text(10), // ANSLOGIN
        Slot::Text(10), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(13), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Text(17), // CWC1
        Slot::Text(17), // CWC2
        Slot::Text(17), // CWC3
        Slot::Text(17), // CWC4
        Slot::Text(17), // CWC5
        Slot::Text(8), // VDN2
        Slot::Text(8), // VDN3
        Slot::Text(8), // VDN4
        Slot::Text(8), // VDN5
        Slot::Text(8), // VDN6
        Slot::Text(8), // VDN7
        Slot::Text(8), // VDN8
        Slot::Text(8), // VDN9
        Slot::Text(97), // ASAI_UUI
        Slot::Skip(4),
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTOP", "TALKTIME", "NETINTIME", "ORIGHOLDTIME", "DISPIVECTOR", "DISPSPLIT",
        "FIRSTIVECTOR", "SPLIT1", "SPLIT2", "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED",
        "HOLDABN", "MALICIOUS", "OBSERVINGCALL", "TRANSFERRED", "AGT_RELEASED", "SPLIT3",
        "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID", "OBS_LOCID", "UUI_LEN", "ACD",
        "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT", "ANSREASON", "ORIGREASON",
        "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4", "EVENT5", "EVENT6", "EVENT7",
        "EVENT8", "EVENT9", "INTERRUPTDEL", "AGENTSURPLUS", "AGENTSKILLLEVEL", "PREFSKILLLEVEL",
        "UCID", "DISPVDN", "EQLOC", "FIRSTVDN", "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER",
        "DIALED_NUM", "CALLING_PTY", "LASTDIGITS", "LASTCWC", "CALLING_II", "CWC1", "CWC2",
        "CWC3", "CWC4", "CWC5", "VDN2", "VDN3", "VDN4", "VDN5", "VDN6", "VDN7", "VDN8", "VDN9",
        "ASAI_UUI",
    ],
    bit_field: BitField { byte_offset: 54, bit_count: 9, splice_index: 16 },
    signed_indices: &[11, 13],
    segment_index: 36,
    segstop_index: 7,
    timestamp_fields: 6..8,
    string_start: 53,
    string_end: None,
};
