//! Transliteration classes, one row per ASCII target.
//!
//! Every row lists the non-ASCII characters that render as its target,
//! regardless of the script they come from. Rows are sorted by target,
//! case-insensitively; characters within a row are sorted by code point.
//! A character must appear in at most one row.

pub(crate) static CLASSES: &[(&str, &[char])] = &[
    (
        "",
        &[
            '\u{00AD}', 'Ъ', 'Ь', 'ъ', 'ь', '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', 'Ⱏ',
            'Ⱐ', 'Ⱜ', 'ⱏ', 'ⱐ', 'ⱜ', '\u{FEFF}',
        ],
    ),
    (
        " ",
        &[
            '\u{00A0}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
            '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{202F}', '\u{205F}',
            '\u{3000}',
        ],
    ),
    ("!", &['¡', '！']),
    ("!!", &['‼']),
    ("!=", &['≠']),
    ("!?", &['⁉']),
    ("\"", &['«', '»', '“', '”', '„', '″', '‶', '❝', '❞', '❮', '❯', '＂']),
    ("#", &['＃']),
    ("$", &['＄']),
    ("%", &['⁒', '％']),
    ("%o", &['‰']),
    ("&", &['＆']),
    ("'", &['‘', '’', '‚', '‛', '′', '‵', '‹', '›', '❛', '❜', '＇']),
    ("(", &['⁽', '₍', '❨', '❪', '（']),
    ("((", &['⸨']),
    ("(1)", &['⑴']),
    ("(10)", &['⑽']),
    ("(11)", &['⑾']),
    ("(12)", &['⑿']),
    ("(13)", &['⒀']),
    ("(14)", &['⒁']),
    ("(15)", &['⒂']),
    ("(16)", &['⒃']),
    ("(17)", &['⒄']),
    ("(18)", &['⒅']),
    ("(19)", &['⒆']),
    ("(2)", &['⑵']),
    ("(20)", &['⒇']),
    ("(3)", &['⑶']),
    ("(4)", &['⑷']),
    ("(5)", &['⑸']),
    ("(6)", &['⑹']),
    ("(7)", &['⑺']),
    ("(8)", &['⑻']),
    ("(9)", &['⑼']),
    ("(a)", &['⒜']),
    ("(A)", &['🄐']),
    ("(b)", &['⒝']),
    ("(B)", &['🄑']),
    ("(c)", &['⒞']),
    ("(C)", &['©', '🄒']),
    ("(d)", &['⒟']),
    ("(D)", &['🄓']),
    ("(e)", &['⒠']),
    ("(E)", &['🄔']),
    ("(f)", &['⒡']),
    ("(F)", &['🄕']),
    ("(g)", &['⒢']),
    ("(G)", &['🄖']),
    ("(h)", &['⒣']),
    ("(H)", &['🄗']),
    ("(i)", &['⒤']),
    ("(I)", &['🄘']),
    ("(j)", &['⒥']),
    ("(J)", &['🄙']),
    ("(k)", &['⒦']),
    ("(K)", &['🄚']),
    ("(l)", &['⒧']),
    ("(L)", &['🄛']),
    ("(m)", &['⒨']),
    ("(M)", &['🄜']),
    ("(n)", &['⒩']),
    ("(N)", &['🄝']),
    ("(o)", &['⒪']),
    ("(O)", &['🄞']),
    ("(p)", &['⒫']),
    ("(P)", &['℗', '🄟']),
    ("(q)", &['⒬']),
    ("(Q)", &['🄠']),
    ("(r)", &['⒭']),
    ("(R)", &['®', '🄡']),
    ("(s)", &['⒮']),
    ("(S)", &['🄢']),
    ("(t)", &['⒯']),
    ("(T)", &['🄣']),
    ("(u)", &['⒰']),
    ("(U)", &['🄤']),
    ("(v)", &['⒱']),
    ("(V)", &['🄥']),
    ("(w)", &['⒲']),
    ("(W)", &['🄦']),
    ("(x)", &['⒳']),
    ("(X)", &['🄧']),
    ("(y)", &['⒴']),
    ("(Y)", &['🄨']),
    ("(z)", &['⒵']),
    ("(Z)", &['🄩']),
    (")", &['⁾', '₎', '❩', '❫', '）']),
    ("))", &['⸩']),
    ("*", &['•', '⁎', '∗', '＊']),
    ("+", &['᛭', '⁺', '₊', '＋']),
    ("+-", &['±']),
    (",", &['，']),
    ("-", &['‐', '‑', '‒', '–', '—', '⁻', '₋', '−', '－']),
    ("->", &['→']),
    (".", &['·', '᛫', '．']),
    ("...", &['…']),
    ("/", &['÷', '⁄', '∕', '／']),
    ("0", &['⁰', '₀', '⓪', '⓿', '０']),
    ("0,", &['🄁']),
    ("0.", &['🄀']),
    ("0/3", &['↉']),
    ("1", &['¹', '₁', '①', '⓵', '❶', '➀', '➊', '１']),
    ("1,", &['🄂']),
    ("1.", &['⒈']),
    ("1/", &['⅟']),
    ("1/10", &['⅒']),
    ("1/2", &['½']),
    ("1/3", &['⅓']),
    ("1/4", &['¼']),
    ("1/5", &['⅕']),
    ("1/6", &['⅙']),
    ("1/7", &['⅐']),
    ("1/8", &['⅛']),
    ("1/9", &['⅑']),
    ("10", &['⑩', '⓾', '❿', '➉', '➓']),
    ("10.", &['⒑']),
    ("11", &['⑪', '⓫']),
    ("11.", &['⒒']),
    ("12", &['⑫', '⓬']),
    ("12.", &['⒓']),
    ("13", &['⑬', '⓭']),
    ("13.", &['⒔']),
    ("14", &['⑭', '⓮']),
    ("14.", &['⒕']),
    ("15", &['⑮', '⓯']),
    ("15.", &['⒖']),
    ("16", &['⑯', '⓰']),
    ("16.", &['⒗']),
    ("17", &['ᛮ', '⑰', '⓱']),
    ("17.", &['⒘']),
    ("18", &['ᛯ', '⑱', '⓲']),
    ("18.", &['⒙']),
    ("19", &['ᛰ', '⑲', '⓳']),
    ("19.", &['⒚']),
    ("2", &['²', '₂', '②', '⓶', '❷', '➁', '➋', '２']),
    ("2,", &['🄃']),
    ("2.", &['⒉']),
    ("2/3", &['⅔']),
    ("2/5", &['⅖']),
    ("20", &['⑳', '⓴']),
    ("20.", &['⒛']),
    ("21", &['㉑']),
    ("22", &['㉒']),
    ("23", &['㉓']),
    ("24", &['㉔']),
    ("25", &['㉕']),
    ("26", &['㉖']),
    ("27", &['㉗']),
    ("28", &['㉘']),
    ("29", &['㉙']),
    ("3", &['³', '₃', '③', '⓷', '❸', '➂', '➌', '３']),
    ("3,", &['🄄']),
    ("3.", &['⒊']),
    ("3/4", &['¾']),
    ("3/5", &['⅗']),
    ("3/8", &['⅜']),
    ("30", &['㉚']),
    ("31", &['㉛']),
    ("32", &['㉜']),
    ("33", &['㉝']),
    ("34", &['㉞']),
    ("35", &['㉟']),
    ("36", &['㊱']),
    ("37", &['㊲']),
    ("38", &['㊳']),
    ("39", &['㊴']),
    ("4", &['⁴', '₄', '④', '⓸', '❹', '➃', '➍', '４']),
    ("4,", &['🄅']),
    ("4.", &['⒋']),
    ("4/5", &['⅘']),
    ("40", &['㊵']),
    ("41", &['㊶']),
    ("42", &['㊷']),
    ("43", &['㊸']),
    ("44", &['㊹']),
    ("45", &['㊺']),
    ("46", &['㊻']),
    ("47", &['㊼']),
    ("48", &['㊽']),
    ("49", &['㊾']),
    ("5", &['⁵', '₅', '⑤', '⓹', '❺', '➄', '➎', '５']),
    ("5,", &['🄆']),
    ("5.", &['⒌']),
    ("5/6", &['⅚']),
    ("5/8", &['⅝']),
    ("50", &['㊿']),
    ("6", &['⁶', '₆', '⑥', '⓺', '❻', '➅', '➏', '６']),
    ("6,", &['🄇']),
    ("6.", &['⒍']),
    ("7", &['⁷', '₇', '⑦', '⓻', '❼', '➆', '➐', '７']),
    ("7,", &['🄈']),
    ("7.", &['⒎']),
    ("7/8", &['⅞']),
    ("8", &['⁸', '₈', '⑧', '⓼', '❽', '➇', '➑', '８']),
    ("8,", &['🄉']),
    ("8.", &['⒏']),
    ("9", &['⁹', '₉', '⑨', '⓽', '❾', '➈', '➒', '９']),
    ("9,", &['🄊']),
    ("9.", &['⒐']),
    (":", &['᛬', '：']),
    (";", &['⁏', '；']),
    ("<", &['❬', '❰', '＜']),
    ("<-", &['←']),
    ("<->", &['↔']),
    ("<=", &['⇐', '≤']),
    ("<=>", &['⇔']),
    ("=", &['⁼', '₌', '＝']),
    ("=>", &['⇒']),
    (">", &['❭', '❱', '＞']),
    (">=", &['≥']),
    ("?", &['¿', '？']),
    ("?!", &['⁈']),
    ("??", &['⁇']),
    ("@", &['＠']),
    (
        "a",
        &[
            'à', 'á', 'â', 'ã', 'ä', 'å', 'ā', 'ă', 'ą', 'ǎ', 'ǟ', 'ǡ', 'ǻ', 'ȁ', 'ȃ', 'ȧ', 'ɐ',
            'ə', 'ɚ', 'ά', 'α', 'а', 'ӑ', 'ӓ', 'ә', 'ӛ', 'ᶏ', 'ᶕ', 'ḁ', 'ẚ', 'ạ', 'ả', 'ấ', 'ầ',
            'ẩ', 'ẫ', 'ậ', 'ắ', 'ằ', 'ẳ', 'ẵ', 'ặ', 'ἀ', 'ἁ', 'ἂ', 'ἃ', 'ἄ', 'ἅ', 'ἆ', 'ἇ', 'ὰ',
            'ά', 'ᾀ', 'ᾁ', 'ᾂ', 'ᾃ', 'ᾄ', 'ᾅ', 'ᾆ', 'ᾇ', 'ᾰ', 'ᾱ', 'ᾲ', 'ᾳ', 'ᾴ', 'ᾶ', 'ᾷ', 'ₐ',
            'ₔ', 'ⓐ', 'ⰰ', 'ⱝ', 'ⱥ', 'Ɐ', 'ⲁ', 'ａ',
        ],
    ),
    (
        "A",
        &[
            'À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Ā', 'Ă', 'Ą', 'Ə', 'Ǎ', 'Ǟ', 'Ǡ', 'Ǻ', 'Ȁ', 'Ȃ', 'Ȧ',
            'Ⱥ', 'Ά', 'Α', 'А', 'Ӑ', 'Ӓ', 'Ә', 'Ӛ', 'ᚨ', 'ᚪ', 'ᛆ', 'ᛷ', 'ᴀ', 'Ḁ', 'Ạ', 'Ả', 'Ấ',
            'Ầ', 'Ẩ', 'Ẫ', 'Ậ', 'Ắ', 'Ằ', 'Ẳ', 'Ẵ', 'Ặ', 'Ἀ', 'Ἁ', 'Ἂ', 'Ἃ', 'Ἄ', 'Ἅ', 'Ἆ', 'Ἇ',
            'ᾈ', 'ᾉ', 'ᾊ', 'ᾋ', 'ᾌ', 'ᾍ', 'ᾎ', 'ᾏ', 'Ᾰ', 'Ᾱ', 'Ὰ', 'Ά', 'ᾼ', 'Ⓐ', 'Ⰰ', 'Ⱝ', 'Ⲁ',
            'Ａ', '🄰',
        ],
    ),
    ("aa", &['ꜳ']),
    ("AA", &['Ꜳ']),
    ("ae", &['æ', 'ǣ', 'ǽ', 'ᴂ']),
    ("AE", &['Æ', 'Ǣ', 'Ǽ', 'ᚫ', 'ᛅ', 'ᛸ', 'ᴁ']),
    ("ao", &['ꜵ']),
    ("AO", &['Ꜵ']),
    ("au", &['ꜷ']),
    ("AU", &['Ꜷ']),
    ("av", &['ꜹ', 'ꜻ']),
    ("AV", &['Ꜹ', 'Ꜻ']),
    ("ay", &['ꜽ']),
    ("AY", &['Ꜽ']),
    ("b", &['ƀ', 'ƃ', 'ɓ', 'β', 'ϐ', 'б', 'ᵬ', 'ᶀ', 'ḃ', 'ḅ', 'ḇ', 'ⓑ', 'ⰱ', 'ｂ']),
    ("B", &['Ɓ', 'Ƃ', 'Ƀ', 'ʙ', 'Β', 'Б', 'ᛒ', 'ᛓ', 'ᴃ', 'Ḃ', 'Ḅ', 'Ḇ', 'Ⓑ', 'Ⰱ', 'Ｂ', '🄱']),
    ("c", &['¢', 'ç', 'ć', 'ĉ', 'ċ', 'č', 'ƈ', 'ȼ', 'ɕ', 'ћ', 'ḉ', 'ⅽ', 'ↄ', 'ⓒ', 'Ꜿ', 'ꜿ', 'ｃ']),
    (
        "C",
        &[
            'Ç', 'Ć', 'Ĉ', 'Ċ', 'Č', 'Ƈ', 'Ȼ', 'ʗ', 'Ћ', 'ᚳ', 'ᛍ', 'ᴄ', 'Ḉ', '℃', 'Ⅽ', 'Ⓒ', 'Ｃ',
            '🄫', '🄲',
        ],
    ),
    ("CD", &['🄭']),
    ("ch", &['χ', 'ϭ', 'ч', 'ҹ', 'ҽ', 'ҿ', 'ӌ', 'ӵ', 'ⱍ', 'ⱟ']),
    ("CH", &['Χ', 'Ϭ', 'Ч', 'Ҹ', 'Ҽ', 'Ҿ', 'Ӌ', 'Ӵ', 'Ⱍ', 'Ⱟ']),
    (
        "d",
        &[
            'ð', 'ď', 'đ', 'ƌ', 'ȡ', 'ɖ', 'ɗ', 'δ', 'д', 'ԁ', 'ᵭ', 'ᶁ', 'ᶑ', 'ḋ', 'ḍ', 'ḏ', 'ḑ',
            'ḓ', 'ⅾ', 'ⓓ', 'ⰴ', 'ⲇ', 'ꝺ', 'ｄ',
        ],
    ),
    (
        "D",
        &[
            'Ð', 'Ď', 'Đ', 'Ɖ', 'Ɗ', 'Ƌ', 'Δ', 'Д', 'Ԁ', 'ᛑ', 'ᛞ', 'ᴅ', 'ᴆ', 'Ḋ', 'Ḍ', 'Ḏ', 'Ḑ',
            'Ḓ', 'Ⅾ', 'Ⓓ', 'Ⰴ', 'Ⲇ', 'Ꝺ', 'Ｄ', '🄳',
        ],
    ),
    ("db", &['ȸ']),
    ("dh", &['ҙ']),
    ("DH", &['Ҙ']),
    ("dj", &['ђ', 'ԃ', 'ⰼ']),
    ("DJ", &['Ђ', 'Ԃ', 'Ⰼ']),
    ("dz", &['ǆ', 'ǳ', 'ʣ', 'ʥ', 'ѕ', 'џ', 'ӡ', 'ԇ', 'ⰷ']),
    ("Dz", &['ǅ', 'ǲ']),
    ("DZ", &['Ǆ', 'Ǳ', 'Ѕ', 'Џ', 'Ӡ', 'Ԇ', 'Ⰷ']),
    (
        "e",
        &[
            'è', 'é', 'ê', 'ë', 'ē', 'ĕ', 'ė', 'ę', 'ě', 'ǝ', 'ȅ', 'ȇ', 'ȩ', 'ɇ', 'ɘ', 'ɛ', 'ɜ',
            'ɝ', 'ɞ', 'ʚ', 'έ', 'ε', 'ϵ', 'е', 'э', 'ѐ', 'ё', 'ѣ', 'ӗ', 'ӭ', 'ᴈ', 'ᶒ', 'ᶓ', 'ᶔ',
            'ḕ', 'ḗ', 'ḙ', 'ḛ', 'ḝ', 'ẹ', 'ẻ', 'ẽ', 'ế', 'ề', 'ể', 'ễ', 'ệ', 'ἐ', 'ἑ', 'ἒ', 'ἓ',
            'ἔ', 'ἕ', 'ὲ', 'έ', 'ₑ', 'ⓔ', 'ⰵ', 'ⱑ', 'ⱔ', 'ⱕ', 'ⱸ', 'ⲉ', 'ｅ',
        ],
    ),
    (
        "E",
        &[
            'È', 'É', 'Ê', 'Ë', 'Ē', 'Ĕ', 'Ė', 'Ę', 'Ě', 'Ǝ', 'Ɛ', 'Ȅ', 'Ȇ', 'Ȩ', 'Ɇ', 'Έ', 'Ε',
            'Ѐ', 'Ё', 'Е', 'Э', 'Ѣ', 'Ӗ', 'Ӭ', 'ᛂ', 'ᛖ', 'ᛶ', 'ᴇ', 'Ḕ', 'Ḗ', 'Ḙ', 'Ḛ', 'Ḝ', 'Ẹ',
            'Ẻ', 'Ẽ', 'Ế', 'Ề', 'Ể', 'Ễ', 'Ệ', 'Ἐ', 'Ἑ', 'Ἒ', 'Ἓ', 'Ἔ', 'Ἕ', 'Ὲ', 'Έ', 'Ⓔ', 'Ⰵ',
            'Ⱑ', 'Ⱔ', 'Ⱕ', 'ⱻ', 'Ⲉ', 'Ｅ', '🄴',
        ],
    ),
    ("EA", &['ᛠ']),
    ("EUR", &['€']),
    ("f", &['ƒ', 'φ', 'ϕ', 'ϥ', 'ф', 'ѳ', 'ᵮ', 'ᶂ', 'ḟ', 'ẛ', 'ⓕ', 'ⱇ', 'ⱚ', 'ⲫ', 'ꝼ', 'ｆ']),
    ("F", &['Ƒ', 'Φ', 'Ϥ', 'Ф', 'Ѳ', 'ᚠ', 'Ḟ', '℉', 'Ⓕ', 'Ⱇ', 'Ⱚ', 'Ⲫ', 'ꜰ', 'Ꝼ', 'ꟻ', 'Ｆ', '🄵']),
    ("ff", &['ﬀ']),
    ("ffi", &['ﬃ']),
    ("ffl", &['ﬄ']),
    ("fi", &['ﬁ']),
    ("fl", &['ﬂ']),
    (
        "g",
        &[
            'ĝ', 'ğ', 'ġ', 'ģ', 'ǵ', 'ɠ', 'ɡ', 'γ', 'г', 'ґ', 'ᵷ', 'ᵹ', 'ᶃ', 'ḡ', 'ⓖ', 'ⰳ', 'ⲅ',
            'ꝿ', 'ｇ',
        ],
    ),
    (
        "G",
        &[
            'Ĝ', 'Ğ', 'Ġ', 'Ģ', 'Ɠ', 'Ǥ', 'ǥ', 'Ǧ', 'ǧ', 'Ǵ', 'ɢ', 'ʛ', 'Γ', 'Г', 'Ґ', 'ᚵ', 'ᚷ',
            'ᚸ', 'Ḡ', 'Ⓖ', 'Ⰳ', 'Ⲅ', 'Ᵹ', 'Ꝿ', 'Ｇ', '🄶',
        ],
    ),
    ("GBP", &['£']),
    ("gh", &['ғ', 'ҕ']),
    ("GH", &['Ғ', 'Ҕ']),
    ("gj", &['ѓ']),
    ("GJ", &['Ѓ']),
    (
        "h",
        &[
            'ĥ', 'ħ', 'ȟ', 'ɥ', 'ɦ', 'ʮ', 'ʯ', 'ϩ', 'ҩ', 'һ', 'ḣ', 'ḥ', 'ḧ', 'ḩ', 'ḫ', 'ẖ', 'ⓗ',
            'ⱈ', 'ⱒ', 'ⱨ', 'ⱶ', 'ｈ',
        ],
    ),
    (
        "H",
        &[
            'Ĥ', 'Ħ', 'Ȟ', 'ʜ', 'Ϩ', 'Ҩ', 'Һ', 'ᚺ', 'ᚻ', 'ᚼ', 'ᚽ', 'Ḣ', 'Ḥ', 'Ḧ', 'Ḩ', 'Ḫ', 'Ⓗ',
            'Ⱈ', 'Ⱒ', 'Ⱨ', 'Ⱶ', 'Ｈ', '🄷',
        ],
    ),
    ("hv", &['ƕ']),
    ("HV", &['Ƕ', '🅊']),
    (
        "i",
        &[
            'ì', 'í', 'î', 'ï', 'ĩ', 'ī', 'ĭ', 'į', 'ı', 'ǐ', 'ȉ', 'ȋ', 'ɨ', 'ΐ', 'ή', 'ί', 'η',
            'ι', 'ϊ', 'и', 'і', 'ѝ', 'ӏ', 'ӣ', 'ӥ', 'ᴉ', 'ᵢ', 'ᵼ', 'ᶖ', 'ḭ', 'ḯ', 'ỉ', 'ị', 'ἠ',
            'ἡ', 'ἢ', 'ἣ', 'ἤ', 'ἥ', 'ἦ', 'ἧ', 'ἰ', 'ἱ', 'ἲ', 'ἳ', 'ἴ', 'ἵ', 'ἶ', 'ἷ', 'ὴ', 'ή',
            'ὶ', 'ί', 'ᾐ', 'ᾑ', 'ᾒ', 'ᾓ', 'ᾔ', 'ᾕ', 'ᾖ', 'ᾗ', 'ι', 'ῂ', 'ῃ', 'ῄ', 'ῆ', 'ῇ', 'ῐ',
            'ῑ', 'ῒ', 'ΐ', 'ῖ', 'ῗ', 'ⁱ', 'ⅰ', 'ⓘ', 'ⰹ', 'ⰺ', 'ⰻ', 'ⲏ', 'ⲓ', 'ｉ',
        ],
    ),
    (
        "I",
        &[
            'Ì', 'Í', 'Î', 'Ï', 'Ĩ', 'Ī', 'Ĭ', 'Į', 'İ', 'Ɩ', 'Ɨ', 'Ǐ', 'Ȉ', 'Ȋ', 'ɪ', 'Ή', 'Ί',
            'Η', 'Ι', 'Ϊ', 'І', 'Ѝ', 'И', 'Ӏ', 'Ӣ', 'Ӥ', 'ᛁ', 'ᛇ', 'ᛵ', 'ᵻ', 'Ḭ', 'Ḯ', 'Ỉ', 'Ị',
            'Ἠ', 'Ἡ', 'Ἢ', 'Ἣ', 'Ἤ', 'Ἥ', 'Ἦ', 'Ἧ', 'Ἰ', 'Ἱ', 'Ἲ', 'Ἳ', 'Ἴ', 'Ἵ', 'Ἶ', 'Ἷ', 'ᾘ',
            'ᾙ', 'ᾚ', 'ᾛ', 'ᾜ', 'ᾝ', 'ᾞ', 'ᾟ', 'Ὴ', 'Ή', 'ῌ', 'Ῐ', 'Ῑ', 'Ὶ', 'Ί', 'Ⅰ', 'Ⓘ', 'Ⰹ',
            'Ⰺ', 'Ⰻ', 'Ⲏ', 'Ⲓ', 'ꟾ', 'Ｉ', '🄸',
        ],
    ),
    ("ii", &['ⅱ']),
    ("II", &['Ⅱ']),
    ("iii", &['ⅲ']),
    ("III", &['Ⅲ']),
    ("ij", &['ĳ']),
    ("IJ", &['Ĳ']),
    ("IO", &['ᛡ']),
    ("iv", &['ⅳ']),
    ("IV", &['Ⅳ']),
    ("ix", &['ⅸ']),
    ("IX", &['Ⅸ']),
    ("j", &['ĵ', 'ǰ', 'ȷ', 'ɉ', 'ɟ', 'ʄ', 'ʝ', 'ϫ', 'ϳ', 'ј', 'ҷ', 'ⓙ', 'ⱼ', 'ｊ']),
    ("J", &['Ĵ', 'Ɉ', 'Ϳ', 'Ϫ', 'Ј', 'Ҷ', 'ᛃ', 'ᛄ', 'ᴊ', 'Ⓙ', 'Ｊ', '🄹']),
    ("JPY", &['¥']),
    (
        "k",
        &[
            'ķ', 'ƙ', 'ǩ', 'ʞ', 'κ', 'ϰ', 'к', 'ҝ', 'ҟ', 'ᶄ', 'ḱ', 'ḳ', 'ḵ', 'ⓚ', 'ⰽ', 'ⱪ', 'ⲕ',
            'ꝁ', 'ꝃ', 'ꝅ', 'ｋ',
        ],
    ),
    (
        "K",
        &[
            'Ķ', 'Ƙ', 'Ǩ', 'Κ', 'К', 'Ҝ', 'Ҟ', 'ᚲ', 'ᚴ', 'ᛣ', 'ᛤ', 'ᛱ', 'ᴋ', 'Ḱ', 'Ḳ', 'Ḵ', 'Ⓚ',
            'Ⰽ', 'Ⱪ', 'Ⲕ', 'Ꝁ', 'Ꝃ', 'Ꝅ', 'Ｋ', '🄺',
        ],
    ),
    ("kh", &['ϧ', 'х', 'ҳ', 'ⲭ']),
    ("KH", &['Ϧ', 'Х', 'Ҳ', 'Ⲭ']),
    ("kj", &['ќ']),
    ("KJ", &['Ќ']),
    ("ks", &['ѯ', 'ⲝ']),
    ("KS", &['Ѯ', 'Ⲝ']),
    (
        "l",
        &[
            'ĺ', 'ļ', 'ľ', 'ŀ', 'ł', 'ƚ', 'ȴ', 'ɫ', 'ɬ', 'ɭ', 'λ', 'л', 'ӆ', 'ᶅ', 'ḷ', 'ḹ', 'ḻ',
            'ḽ', 'ⅼ', 'ⓛ', 'ⰾ', 'ⱡ', 'ⲗ', 'ꝇ', 'ꝉ', 'ꞁ', 'ｌ',
        ],
    ),
    (
        "L",
        &[
            'Ĺ', 'Ļ', 'Ľ', 'Ŀ', 'Ł', 'Ƚ', 'ʟ', 'Λ', 'Л', 'Ӆ', 'ᛚ', 'ᛛ', 'ᴌ', 'Ḷ', 'Ḹ', 'Ḻ', 'Ḽ',
            'Ⅼ', 'Ⓛ', 'Ⰾ', 'Ⱡ', 'Ɫ', 'Ⲗ', 'Ꝇ', 'Ꝉ', 'Ꞁ', 'Ｌ', '🄻',
        ],
    ),
    ("lj", &['ǉ', 'љ', 'ԉ']),
    ("Lj", &['ǈ']),
    ("LJ", &['Ǉ', 'Љ', 'Ԉ']),
    ("ll", &['ỻ']),
    ("LL", &['Ỻ']),
    ("ls", &['ʪ']),
    ("lz", &['ʫ']),
    ("m", &['ɯ', 'ɰ', 'ɱ', 'μ', 'м', 'ӎ', 'ᵯ', 'ᶆ', 'ḿ', 'ṁ', 'ṃ', 'ⅿ', 'ⓜ', 'ⰿ', 'ⱞ', 'ⲙ', 'ｍ']),
    (
        "M",
        &[
            'Ɯ', 'Μ', 'М', 'Ӎ', 'ᛗ', 'ᛘ', 'ᛙ', 'ᴍ', 'Ḿ', 'Ṁ', 'Ṃ', 'Ⅿ', 'Ⓜ', 'Ⰿ', 'Ⱞ', 'Ɱ', 'Ⲙ',
            'ꟽ', 'ꟿ', 'Ｍ', '🄼',
        ],
    ),
    ("MV", &['🅋']),
    (
        "n",
        &[
            'ñ', 'ń', 'ņ', 'ň', 'ŉ', 'ŋ', 'ƞ', 'ǹ', 'ȵ', 'ɲ', 'ɳ', 'ν', 'н', 'ӊ', 'ᵰ', 'ᶇ', 'ṅ',
            'ṇ', 'ṉ', 'ṋ', 'ⁿ', 'ⓝ', 'ⱀ', 'ⲛ', 'ｎ',
        ],
    ),
    (
        "N",
        &[
            'Ñ', 'Ń', 'Ņ', 'Ň', 'Ŋ', 'Ɲ', 'Ǹ', 'Ƞ', 'ɴ', 'Ν', 'Н', 'Ӊ', 'ᚾ', 'ᚿ', 'ᛀ', 'ᴎ', 'Ṅ',
            'Ṇ', 'Ṉ', 'Ṋ', 'Ⓝ', 'Ⱀ', 'Ⲛ', 'Ｎ', '🄽',
        ],
    ),
    ("ng", &['ң', 'ҥ', 'ӈ']),
    ("NG", &['Ң', 'Ҥ', 'Ӈ', 'ᚶ', 'ᛜ', 'ᛝ']),
    ("nj", &['ǌ', 'њ', 'ԋ']),
    ("Nj", &['ǋ']),
    ("NJ", &['Ǌ', 'Њ', 'Ԋ']),
    ("No", &['№']),
    (
        "o",
        &[
            'ò', 'ó', 'ô', 'õ', 'ö', 'ø', 'ō', 'ŏ', 'ő', 'ơ', 'ǒ', 'ǫ', 'ǭ', 'ǿ', 'ȍ', 'ȏ', 'ȫ',
            'ȭ', 'ȯ', 'ȱ', 'ɔ', 'ɵ', 'ο', 'ω', 'ό', 'ώ', 'о', 'ѡ', 'ѻ', 'ӧ', 'ө', 'ӫ', 'ᴖ', 'ᴗ',
            'ᶗ', 'ṍ', 'ṏ', 'ṑ', 'ṓ', 'ọ', 'ỏ', 'ố', 'ồ', 'ổ', 'ỗ', 'ộ', 'ớ', 'ờ', 'ở', 'ỡ', 'ợ',
            'ὀ', 'ὁ', 'ὂ', 'ὃ', 'ὄ', 'ὅ', 'ὠ', 'ὡ', 'ὢ', 'ὣ', 'ὤ', 'ὥ', 'ὦ', 'ὧ', 'ὸ', 'ό', 'ὼ',
            'ώ', 'ᾠ', 'ᾡ', 'ᾢ', 'ᾣ', 'ᾤ', 'ᾥ', 'ᾦ', 'ᾧ', 'ῲ', 'ῳ', 'ῴ', 'ῶ', 'ῷ', 'ₒ', 'ⓞ', 'ⱁ',
            'ⱉ', 'ⱘ', 'ⱺ', 'ⲟ', 'ⲱ', 'ꝋ', 'ꝍ', 'ｏ',
        ],
    ),
    (
        "O",
        &[
            'Ò', 'Ó', 'Ô', 'Õ', 'Ö', 'Ø', 'Ō', 'Ŏ', 'Ő', 'Ɔ', 'Ɵ', 'Ơ', 'Ǒ', 'Ǫ', 'Ǭ', 'Ǿ', 'Ȍ',
            'Ȏ', 'Ȫ', 'Ȭ', 'Ȯ', 'Ȱ', 'Ό', 'Ώ', 'Ο', 'Ω', 'О', 'Ѡ', 'Ѻ', 'Ӧ', 'Ө', 'Ӫ', 'ᚩ', 'ᚬ',
            'ᚭ', 'ᚮ', 'ᛟ', 'ᛴ', 'ᴏ', 'ᴐ', 'Ṍ', 'Ṏ', 'Ṑ', 'Ṓ', 'Ọ', 'Ỏ', 'Ố', 'Ồ', 'Ổ', 'Ỗ', 'Ộ',
            'Ớ', 'Ờ', 'Ở', 'Ỡ', 'Ợ', 'Ὀ', 'Ὁ', 'Ὂ', 'Ὃ', 'Ὄ', 'Ὅ', 'Ὠ', 'Ὡ', 'Ὢ', 'Ὣ', 'Ὤ', 'Ὥ',
            'Ὦ', 'Ὧ', 'ᾨ', 'ᾩ', 'ᾪ', 'ᾫ', 'ᾬ', 'ᾭ', 'ᾮ', 'ᾯ', 'Ὸ', 'Ό', 'Ὼ', 'Ώ', 'ῼ', 'Ⓞ', 'Ⱁ',
            'Ⱉ', 'Ⱘ', 'Ⲟ', 'Ⲱ', 'Ꝋ', 'Ꝍ', 'Ｏ', '🄾',
        ],
    ),
    ("oe", &['œ', 'ᴔ']),
    ("OE", &['Œ', 'ɶ', 'ᚯ']),
    ("ON", &['ᚰ']),
    ("oo", &['ꝏ']),
    ("OO", &['ᛳ', 'Ꝏ']),
    ("ot", &['ѿ']),
    ("OT", &['Ѿ']),
    ("ou", &['ȣ']),
    ("OU", &['Ȣ', 'ᴕ']),
    (
        "p",
        &[
            'ƥ', 'π', 'ϖ', 'п', 'ҧ', 'ᵱ', 'ᵽ', 'ᶈ', 'ṕ', 'ṗ', 'ⓟ', 'ⱂ', 'ⱊ', 'ⲡ', 'ꝑ', 'ꝓ', 'ꝕ',
            'ꟼ', 'ｐ',
        ],
    ),
    (
        "P",
        &[
            'Ƥ', 'Π', 'П', 'Ҧ', 'ᛈ', 'ᛔ', 'ᛕ', 'ᴘ', 'Ṕ', 'Ṗ', 'Ⓟ', 'Ⱂ', 'Ⱊ', 'Ᵽ', 'Ⲡ', 'Ꝑ', 'Ꝓ',
            'Ꝕ', 'Ｐ', '🄿',
        ],
    ),
    ("PPV", &['🅎']),
    ("ps", &['ψ', 'ѱ', 'ⲯ']),
    ("PS", &['Ψ', 'Ѱ', 'Ⲯ']),
    ("q", &['ĸ', 'ɋ', 'ʠ', 'ϙ', 'ϟ', 'қ', 'ҡ', 'ӄ', 'ⓠ', 'ꝗ', 'ꝙ', 'ｑ']),
    ("Q", &['Ɋ', 'Ϙ', 'Ϟ', 'Қ', 'Ҡ', 'Ӄ', 'ᛢ', 'ᛩ', 'Ⓠ', 'Ꝗ', 'Ꝙ', 'Ｑ', '🅀']),
    ("qp", &['ȹ']),
    (
        "r",
        &[
            'ŕ', 'ŗ', 'ř', 'ȑ', 'ȓ', 'ɍ', 'ɼ', 'ɽ', 'ɾ', 'ɿ', 'ρ', 'ϱ', 'р', 'ᵣ', 'ᵲ', 'ᵳ', 'ᶉ',
            'ṙ', 'ṛ', 'ṝ', 'ṟ', 'ῤ', 'ῥ', 'ⓡ', 'ⱃ', 'ⲣ', 'ꝛ', 'ꞃ', 'ｒ',
        ],
    ),
    (
        "R",
        &[
            'Ŕ', 'Ŗ', 'Ř', 'Ȑ', 'Ȓ', 'Ɍ', 'ʀ', 'ʁ', 'Ρ', 'Р', 'ᚱ', 'ᴙ', 'ᴚ', 'Ṙ', 'Ṛ', 'Ṝ', 'Ṟ',
            'Ῥ', 'Ⓡ', 'Ⱃ', 'Ɽ', 'Ⲣ', 'Ꝛ', 'Ꞃ', 'Ｒ', '🄬', '🅁',
        ],
    ),
    (
        "s",
        &[
            'ś', 'ŝ', 'ş', 'š', 'ſ', 'ș', 'ȿ', 'ʂ', 'ς', 'σ', 'ϲ', 'с', 'ҫ', 'ᵴ', 'ᶊ', 'ṡ', 'ṣ',
            'ṥ', 'ṧ', 'ṩ', 'ẜ', 'ẝ', 'ⓢ', 'ⱄ', 'ⲋ', 'ⲥ', 'Ꞅ', 'ｓ',
        ],
    ),
    (
        "S",
        &[
            'Ś', 'Ŝ', 'Ş', 'Š', 'Ș', 'Σ', 'Ϲ', 'С', 'Ҫ', 'ᛊ', 'ᛋ', 'ᛌ', 'Ṡ', 'Ṣ', 'Ṥ', 'Ṧ', 'Ṩ',
            'Ⓢ', 'Ⱄ', 'Ⲋ', 'Ⲥ', 'ꜱ', 'ꞅ', 'Ｓ', '🅂',
        ],
    ),
    ("SD", &['🅌']),
    ("sh", &['ϣ', 'ш', 'ⱎ']),
    ("SH", &['Ϣ', 'Ш', 'ᛲ', 'Ⱎ']),
    ("shch", &['щ']),
    ("SHCH", &['Щ']),
    ("sht", &['ⱋ']),
    ("SHT", &['Ⱋ']),
    ("sj", &['ԍ']),
    ("SJ", &['Ԍ']),
    ("SM", &['℠']),
    ("ss", &['ß']),
    ("SS", &['ẞ', '🅍']),
    ("st", &['ϛ', 'ﬆ']),
    ("ST", &['Ϛ', 'ᛥ']),
    (
        "t",
        &[
            'ţ', 'ť', 'ŧ', 'ƫ', 'ƭ', 'ț', 'ȶ', 'ʇ', 'ʈ', 'τ', 'т', 'ҭ', 'ᵵ', 'ṫ', 'ṭ', 'ṯ', 'ṱ',
            'ẗ', 'ⓣ', 'ⱅ', 'ⱦ', 'ⲧ', 'ｔ',
        ],
    ),
    (
        "T",
        &[
            'Ţ', 'Ť', 'Ŧ', 'Ƭ', 'Ʈ', 'Ț', 'Ⱦ', 'Τ', 'Т', 'Ҭ', 'ᛏ', 'ᛐ', 'ᴛ', 'Ṫ', 'Ṭ', 'Ṯ', 'Ṱ',
            'Ⓣ', 'Ⱅ', 'Ⲧ', 'Ꞇ', 'Ｔ', '🅃',
        ],
    ),
    ("tc", &['ʨ']),
    ("th", &['þ', 'θ', 'ϑ', 'ᵺ', 'ⲑ', 'ꝧ']),
    ("TH", &['Þ', 'Θ', 'ϴ', 'ᚦ', 'ᚧ', 'Ⲑ', 'Ꝧ']),
    ("ti", &['ϯ']),
    ("TI", &['Ϯ']),
    ("tj", &['ԏ']),
    ("TJ", &['Ԏ']),
    ("TM", &['™']),
    ("ts", &['ʦ', 'ц', 'ҵ', 'ⱌ']),
    ("TS", &['Ц', 'Ҵ', 'Ⱌ']),
    ("tz", &['ꜩ']),
    ("TZ", &['Ꜩ']),
    (
        "u",
        &[
            'µ', 'ù', 'ú', 'û', 'ü', 'ũ', 'ū', 'ŭ', 'ů', 'ű', 'ų', 'ư', 'ǔ', 'ǖ', 'ǘ', 'ǚ', 'ǜ',
            'ȕ', 'ȗ', 'ʉ', 'у', 'ў', 'ѫ', 'ѹ', 'ү', 'ұ', 'ӯ', 'ӱ', 'ӳ', 'ᵤ', 'ᶙ', 'ṳ', 'ṵ', 'ṷ',
            'ṹ', 'ṻ', 'ụ', 'ủ', 'ứ', 'ừ', 'ử', 'ữ', 'ự', 'ⓤ', 'ⱆ', 'ⲩ', 'ｕ',
        ],
    ),
    (
        "U",
        &[
            'Ù', 'Ú', 'Û', 'Ü', 'Ũ', 'Ū', 'Ŭ', 'Ů', 'Ű', 'Ų', 'Ư', 'Ǔ', 'Ǖ', 'Ǘ', 'Ǚ', 'Ǜ', 'Ȕ',
            'Ȗ', 'Ʉ', 'Ў', 'У', 'Ѫ', 'Ѹ', 'Ү', 'Ұ', 'Ӯ', 'Ӱ', 'Ӳ', 'ᚢ', 'ᴜ', 'ᵾ', 'Ṳ', 'Ṵ', 'Ṷ',
            'Ṹ', 'Ṻ', 'Ụ', 'Ủ', 'Ứ', 'Ừ', 'Ử', 'Ữ', 'Ự', 'Ⓤ', 'Ⱆ', 'Ⲩ', 'Ｕ', '🅄',
        ],
    ),
    ("ue", &['ᵫ']),
    ("v", &['ʋ', 'ʌ', 'в', 'ᵥ', 'ᶌ', 'ṽ', 'ṿ', 'ⅴ', 'ⓥ', 'ⰲ', 'ⱱ', 'ⱴ', 'ⲃ', 'ꝟ', 'ｖ']),
    ("V", &['Ʋ', 'Ʌ', 'В', 'ᚡ', 'ᴠ', 'Ṽ', 'Ṿ', 'Ỽ', 'Ⅴ', 'Ⓥ', 'Ⰲ', 'Ⲃ', 'Ꝟ', 'Ꝩ', 'Ｖ', '🅅']),
    ("vi", &['ⅵ']),
    ("VI", &['Ⅵ']),
    ("vii", &['ⅶ']),
    ("VII", &['Ⅶ']),
    ("viii", &['ⅷ']),
    ("VIII", &['Ⅷ']),
    ("vy", &['ꝡ']),
    ("VY", &['Ꝡ']),
    ("w", &['ŵ', 'ƿ', 'ʍ', 'ϝ', 'ẁ', 'ẃ', 'ẅ', 'ẇ', 'ẉ', 'ẘ', 'ⓦ', 'ⱳ', 'ｗ']),
    ("W", &['Ŵ', 'Ƿ', 'Ϝ', 'ᚥ', 'ᚹ', 'ᴡ', 'Ẁ', 'Ẃ', 'Ẅ', 'Ẇ', 'Ẉ', 'Ⓦ', 'Ⱳ', 'Ｗ', '🅆']),
    ("WC", &['🅏']),
    ("WZ", &['🄮']),
    ("x", &['×', 'ξ', 'ᶍ', 'ẋ', 'ẍ', 'ₓ', 'ⅹ', 'ⓧ', 'ｘ']),
    ("X", &['Ξ', 'ᛪ', 'Ẋ', 'Ẍ', 'Ⅹ', 'Ⓧ', 'Ｘ', '🅇']),
    ("xi", &['ⅺ']),
    ("XI", &['Ⅺ']),
    ("xii", &['ⅻ']),
    ("XII", &['Ⅻ']),
    (
        "y",
        &[
            'ý', 'ÿ', 'ŷ', 'ƴ', 'ȳ', 'ɏ', 'ʎ', 'ΰ', 'υ', 'ϋ', 'ύ', 'й', 'ы', 'ѵ', 'ѷ', 'ӹ', 'ẏ',
            'ẙ', 'ỳ', 'ỵ', 'ỷ', 'ỹ', 'ỿ', 'ὐ', 'ὑ', 'ὒ', 'ὓ', 'ὔ', 'ὕ', 'ὖ', 'ὗ', 'ὺ', 'ύ', 'ῠ',
            'ῡ', 'ῢ', 'ΰ', 'ῦ', 'ῧ', 'ⓨ', 'ⱛ', 'ｙ',
        ],
    ),
    (
        "Y",
        &[
            'Ý', 'Ŷ', 'Ÿ', 'Ƴ', 'Ȳ', 'Ɏ', 'ʏ', 'Ύ', 'Υ', 'Ϋ', 'ϒ', 'ϓ', 'ϔ', 'Й', 'Ы', 'Ѵ', 'Ѷ',
            'Ӹ', 'ᚣ', 'ᚤ', 'ᛦ', 'ᛧ', 'ᛨ', 'Ẏ', 'Ỳ', 'Ỵ', 'Ỷ', 'Ỹ', 'Ỿ', 'Ὑ', 'Ὓ', 'Ὕ', 'Ὗ', 'Ῠ',
            'Ῡ', 'Ὺ', 'Ύ', 'Ⓨ', 'Ⱛ', 'Ｙ', '🅈',
        ],
    ),
    ("ya", &['я', 'ѧ']),
    ("YA", &['Я', 'Ѧ']),
    ("ye", &['є', 'ѥ', 'ѩ', 'ⱗ']),
    ("YE", &['Є', 'Ѥ', 'Ѩ', 'Ⱗ']),
    ("yi", &['ї']),
    ("YI", &['Ї']),
    ("yo", &['ⱖ', 'ⱙ']),
    ("YO", &['Ⱖ', 'Ⱙ']),
    ("yu", &['ю', 'ѭ', 'ⱓ']),
    ("YU", &['Ю', 'Ѭ', 'Ⱓ']),
    (
        "z",
        &[
            'ź', 'ż', 'ž', 'ƶ', 'ȝ', 'ȥ', 'ɀ', 'ʐ', 'ʑ', 'ζ', 'з', 'ӟ', 'ԅ', 'ᵶ', 'ᶎ', 'ẑ', 'ẓ',
            'ẕ', 'ⓩ', 'ⰸ', 'ⱬ', 'ⲍ', 'ꝣ', 'ｚ',
        ],
    ),
    (
        "Z",
        &[
            'Ź', 'Ż', 'Ž', 'Ƶ', 'Ȝ', 'Ȥ', 'Ζ', 'З', 'Ӟ', 'Ԅ', 'ᛉ', 'ᛎ', 'ᴢ', 'Ẑ', 'Ẓ', 'Ẕ', 'Ⓩ',
            'Ⰸ', 'Ⱬ', 'Ⲍ', 'Ꝣ', 'Ｚ', '🅉',
        ],
    ),
    ("zh", &['ж', 'җ', 'ӂ', 'ӝ', 'ⰶ']),
    ("ZH", &['Ж', 'Җ', 'Ӂ', 'Ӝ', 'Ⰶ']),
    ("[", &['⁅', '❲', '［']),
    ("\\", &['＼']),
    ("]", &['⁆', '❳', '］']),
    ("^", &['‸', '＾']),
    ("_", &['＿']),
    ("{", &['❴', '｛']),
    ("|", &['¦']),
    ("}", &['❵', '｝']),
    ("~", &['⁓', '≈', '～']),
];
