//! Embedded HSK 1-3 vocabulary and grammar topics.

use super::models::HskLevel::{self, Hsk1, Hsk2, Hsk3};

/// (id, characters, pinyin, english, level)
pub(super) const WORDS: &[(&str, &str, &str, &str, HskLevel)] = &[
    // ── HSK 1 ───────────────────────────────────────────────────────────
    ("h1-01", "爱", "ài", "to love", Hsk1),
    ("h1-02", "八", "bā", "eight", Hsk1),
    ("h1-03", "爸爸", "bàba", "father", Hsk1),
    ("h1-04", "杯子", "bēizi", "cup; glass", Hsk1),
    ("h1-05", "北京", "Běijīng", "Beijing", Hsk1),
    ("h1-06", "本", "běn", "measure word for books", Hsk1),
    ("h1-07", "不客气", "bú kèqi", "you're welcome", Hsk1),
    ("h1-08", "菜", "cài", "dish; vegetable", Hsk1),
    ("h1-09", "茶", "chá", "tea", Hsk1),
    ("h1-10", "吃", "chī", "to eat", Hsk1),
    ("h1-11", "出租车", "chūzūchē", "taxi", Hsk1),
    ("h1-12", "打电话", "dǎ diànhuà", "to make a phone call", Hsk1),
    ("h1-13", "大", "dà", "big", Hsk1),
    ("h1-14", "的", "de", "possessive particle", Hsk1),
    ("h1-15", "点", "diǎn", "o'clock; a little", Hsk1),
    ("h1-16", "电脑", "diànnǎo", "computer", Hsk1),
    ("h1-17", "电视", "diànshì", "television", Hsk1),
    ("h1-18", "东西", "dōngxi", "thing; stuff", Hsk1),
    ("h1-19", "都", "dōu", "all; both", Hsk1),
    ("h1-20", "读", "dú", "to read", Hsk1),
    ("h1-21", "对不起", "duìbuqǐ", "sorry", Hsk1),
    ("h1-22", "多少", "duōshao", "how many; how much", Hsk1),
    ("h1-23", "儿子", "érzi", "son", Hsk1),
    ("h1-24", "饭店", "fàndiàn", "restaurant; hotel", Hsk1),
    ("h1-25", "飞机", "fēijī", "airplane", Hsk1),
    ("h1-26", "高兴", "gāoxìng", "happy", Hsk1),
    ("h1-27", "工作", "gōngzuò", "to work; job", Hsk1),
    ("h1-28", "汉语", "Hànyǔ", "Chinese language", Hsk1),
    ("h1-29", "好", "hǎo", "good", Hsk1),
    ("h1-30", "喝", "hē", "to drink", Hsk1),
    ("h1-31", "你", "nǐ", "you", Hsk1),
    ("h1-32", "朋友", "péngyou", "friend", Hsk1),
    ("h1-33", "是", "shì", "to be", Hsk1),
    ("h1-34", "我", "wǒ", "I; me", Hsk1),
    ("h1-35", "学习", "xuéxí", "to study", Hsk1),
    ("h1-36", "中国", "Zhōngguó", "China", Hsk1),
    // ── HSK 2 ───────────────────────────────────────────────────────────
    ("h2-01", "吧", "ba", "suggestion particle", Hsk2),
    ("h2-02", "白", "bái", "white", Hsk2),
    ("h2-03", "帮助", "bāngzhù", "to help", Hsk2),
    ("h2-04", "报纸", "bàozhǐ", "newspaper", Hsk2),
    ("h2-05", "比", "bǐ", "compared to", Hsk2),
    ("h2-06", "别", "bié", "don't", Hsk2),
    ("h2-07", "长", "cháng", "long", Hsk2),
    ("h2-08", "唱歌", "chànggē", "to sing", Hsk2),
    ("h2-09", "出", "chū", "to go out", Hsk2),
    ("h2-10", "穿", "chuān", "to wear", Hsk2),
    ("h2-11", "次", "cì", "time (occurrence)", Hsk2),
    ("h2-12", "从", "cóng", "from", Hsk2),
    ("h2-13", "错", "cuò", "wrong", Hsk2),
    ("h2-14", "打篮球", "dǎ lánqiú", "to play basketball", Hsk2),
    ("h2-15", "大家", "dàjiā", "everyone", Hsk2),
    ("h2-16", "但是", "dànshì", "but", Hsk2),
    ("h2-17", "到", "dào", "to arrive", Hsk2),
    ("h2-18", "得", "de", "complement particle", Hsk2),
    ("h2-19", "等", "děng", "to wait", Hsk2),
    ("h2-20", "弟弟", "dìdi", "younger brother", Hsk2),
    ("h2-21", "懂", "dǒng", "to understand", Hsk2),
    ("h2-22", "房间", "fángjiān", "room", Hsk2),
    ("h2-23", "非常", "fēicháng", "very; extremely", Hsk2),
    ("h2-24", "服务员", "fúwùyuán", "waiter; attendant", Hsk2),
    ("h2-25", "高", "gāo", "tall; high", Hsk2),
    ("h2-26", "告诉", "gàosu", "to tell", Hsk2),
    ("h2-27", "旅游", "lǚyóu", "to travel", Hsk2),
    ("h2-28", "准备", "zhǔnbèi", "to prepare", Hsk2),
    // ── HSK 3 ───────────────────────────────────────────────────────────
    ("h3-01", "阿姨", "āyí", "aunt; nanny", Hsk3),
    ("h3-02", "啊", "a", "interjection particle", Hsk3),
    ("h3-03", "矮", "ǎi", "short (height)", Hsk3),
    ("h3-04", "爱好", "àihào", "hobby", Hsk3),
    ("h3-05", "安静", "ānjìng", "quiet", Hsk3),
    ("h3-06", "把", "bǎ", "disposal particle", Hsk3),
    ("h3-07", "搬", "bān", "to move", Hsk3),
    ("h3-08", "办法", "bànfǎ", "method; way", Hsk3),
    ("h3-09", "办公室", "bàngōngshì", "office", Hsk3),
    ("h3-10", "帮忙", "bāngmáng", "to help out", Hsk3),
    ("h3-11", "包", "bāo", "bag", Hsk3),
    ("h3-12", "饱", "bǎo", "full (after eating)", Hsk3),
    ("h3-13", "北方", "běifāng", "north", Hsk3),
    ("h3-14", "被", "bèi", "passive marker", Hsk3),
    ("h3-15", "鼻子", "bízi", "nose", Hsk3),
    ("h3-16", "比较", "bǐjiào", "relatively; to compare", Hsk3),
    ("h3-17", "必须", "bìxū", "must", Hsk3),
    ("h3-18", "变化", "biànhuà", "change", Hsk3),
    ("h3-19", "表示", "biǎoshì", "to express", Hsk3),
    ("h3-20", "别人", "biérén", "other people", Hsk3),
    ("h3-21", "宾馆", "bīnguǎn", "guesthouse", Hsk3),
    ("h3-22", "冰箱", "bīngxiāng", "refrigerator", Hsk3),
    ("h3-23", "才", "cái", "only then", Hsk3),
    ("h3-24", "菜单", "càidān", "menu", Hsk3),
    ("h3-25", "参加", "cānjiā", "to participate", Hsk3),
    ("h3-26", "检查", "jiǎnchá", "to check", Hsk3),
];

/// (id, title, level, description)
pub(super) const GRAMMAR: &[(&str, &str, HskLevel, &str)] = &[
    // ── HSK 1 ───────────────────────────────────────────────────────────
    ("g1-01", "是 (shì) sentences", Hsk1, "Linking nouns with 是 to say what something is."),
    ("g1-02", "吗 (ma) questions", Hsk1, "Turning statements into yes/no questions with 吗."),
    ("g1-03", "Negation with 不 (bù)", Hsk1, "Negating verbs and adjectives with 不."),
    ("g1-04", "Possession with 的 (de)", Hsk1, "Marking possession and modifiers with 的."),
    ("g1-05", "Measure words with 个 (gè)", Hsk1, "Counting nouns with numbers and 个."),
    // ── HSK 2 ───────────────────────────────────────────────────────────
    ("g2-01", "Comparisons with 比 (bǐ)", Hsk2, "Comparing two things with A 比 B + adjective."),
    ("g2-02", "Aspect particle 过 (guo)", Hsk2, "Talking about past experiences with 过."),
    ("g2-03", "Progressive 正在 (zhèngzài)", Hsk2, "Describing ongoing actions with 正在...呢."),
    ("g2-04", "Degree complement 得 (de)", Hsk2, "Describing how an action is done with 得."),
    ("g2-05", "Suggestions with 吧 (ba)", Hsk2, "Softening requests and suggestions with 吧."),
    // ── HSK 3 ───────────────────────────────────────────────────────────
    ("g3-01", "把 (bǎ) sentences", Hsk3, "Emphasizing what happens to an object with 把."),
    ("g3-02", "Passive with 被 (bèi)", Hsk3, "Forming passive sentences with 被."),
    ("g3-03", "Result complements", Hsk3, "Showing the result of an action, e.g. 看完, 听懂."),
    ("g3-04", "越来越 (yuè lái yuè)", Hsk3, "Expressing increasing change over time."),
    ("g3-05", "只有...才... (zhǐyǒu...cái...)", Hsk3, "Stating a necessary condition."),
];
