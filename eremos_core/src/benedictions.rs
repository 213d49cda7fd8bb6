//! Closing benedictions, rotated by plan day.
//!
//! A fixed pool of thirty scripture benedictions; the day's pick is a pure
//! function of the plan day, same clamping rule as the prompt rotation.

/// A scripture benediction with its citation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benediction {
    pub reference: &'static str,
    pub text: &'static str,
}

static BENEDICTIONS: &[Benediction] = &[
    Benediction {
        reference: "Numbers 6:24-26",
        text: "The LORD bless you and keep you; the LORD make his face shine on you and be gracious to you; the LORD turn his face toward you and give you peace.",
    },
    Benediction {
        reference: "Romans 8:38-39",
        text: "For I am sure that neither death nor life, nor angels nor rulers, nor things present nor things to come, nor powers, nor height nor depth, nor anything else in all creation, will be able to separate us from the love of God in Christ Jesus our Lord.",
    },
    Benediction {
        reference: "Romans 11:33, 36",
        text: "Oh, the depth of the riches and wisdom and knowledge of God! How unsearchable are his judgments and how inscrutable his ways! For from him and through him and to him are all things. To him be glory forever. Amen.",
    },
    Benediction {
        reference: "Romans 15:5-6",
        text: "May the God of endurance and encouragement grant you to live in such harmony with one another, in accord with Christ Jesus, that together you may with one voice glorify the God and Father of our Lord Jesus Christ.",
    },
    Benediction {
        reference: "Romans 15:13",
        text: "May the God of hope fill you with all joy and peace in believing, so that by the power of the Holy Spirit you may abound in hope.",
    },
    Benediction {
        reference: "1 Corinthians 15:58",
        text: "Therefore, my beloved brothers, be steadfast, immovable, always abounding in the work of the Lord, knowing that in the Lord your labor is not in vain.",
    },
    Benediction {
        reference: "2 Corinthians 13:11",
        text: "Finally, brothers, rejoice. Aim for restoration, comfort one another, agree with one another, live in peace; and the God of love and peace will be with you.",
    },
    Benediction {
        reference: "2 Corinthians 13:14",
        text: "The grace of the Lord Jesus Christ and the love of God and the fellowship of the Holy Spirit be with you all.",
    },
    Benediction {
        reference: "Galatians 6:18",
        text: "The grace of our Lord Jesus Christ be with your spirit, brothers. Amen.",
    },
    Benediction {
        reference: "Ephesians 3:17-19",
        text: "May Christ dwell in your hearts through faith\u{2014}that you, being rooted and grounded in love, may have strength to comprehend with all the saints what is the breadth and length and height and depth, and to know the love of Christ that surpasses knowledge, that you may be filled with all the fullness of God.",
    },
    Benediction {
        reference: "Ephesians 3:20-21",
        text: "Now to him who is able to do far more abundantly than all that we ask or think, according to the power at work within us, to him be glory in the church and in Christ Jesus throughout all generations, forever and ever. Amen.",
    },
    Benediction {
        reference: "Ephesians 6:23-24",
        text: "Peace be to the brothers, and love with faith, from God the Father and the Lord Jesus Christ. Grace be with all who love our Lord Jesus Christ with love incorruptible.",
    },
    Benediction {
        reference: "Philippians 4:7",
        text: "May the peace of God, which surpasses all understanding, guard your hearts and your minds in Christ Jesus.",
    },
    Benediction {
        reference: "Colossians 3:15",
        text: "And let the peace of Christ rule in your hearts, to which indeed you were called in one body. And be thankful.",
    },
    Benediction {
        reference: "Colossians 3:16-17",
        text: "Let the word of Christ dwell in you richly, teaching and admonishing one another in all wisdom, singing psalms and hymns and spiritual songs, with thankfulness in your hearts to God. And whatever you do, in word or deed, do everything in the name of the Lord Jesus, giving thanks to God the Father through him.",
    },
    Benediction {
        reference: "1 Thessalonians 3:12-13",
        text: "May the Lord make you increase and abound in love for one another and for all, as we do for you, so that he may establish your hearts blameless in holiness before our God and Father, at the coming of our Lord Jesus with all his saints.",
    },
    Benediction {
        reference: "1 Thessalonians 5:23-24",
        text: "Now may the God of peace himself sanctify you completely, and may your whole spirit and soul and body be kept blameless at the coming of our Lord Jesus Christ. He who calls you is faithful; he will surely do it.",
    },
    Benediction {
        reference: "2 Thessalonians 2:16-17",
        text: "Now may our Lord Jesus Christ himself, and God our Father, who loved us and gave us eternal comfort and good hope through grace, comfort your hearts and establish them in every good work and word.",
    },
    Benediction {
        reference: "1 Timothy 1:17",
        text: "To the King of ages, immortal, invisible, the only God, be honor and glory forever and ever. Amen.",
    },
    Benediction {
        reference: "1 Timothy 6:15-16",
        text: "He who is the blessed and only Sovereign, the King of kings and Lord of lords, who alone has immortality, who dwells in unapproachable light, whom no one has ever seen or can see. To him be honor and eternal dominion. Amen.",
    },
    Benediction {
        reference: "Philemon 1:25",
        text: "The grace of the Lord Jesus Christ be with your spirit.",
    },
    Benediction {
        reference: "Hebrews 13:20-21",
        text: "Now may the God of peace who brought again from the dead our Lord Jesus, the great shepherd of the sheep, by the blood of the eternal covenant, equip you with everything good that you may do his will, working in us that which is pleasing in his sight, through Jesus Christ, to whom be glory forever and ever. Amen.",
    },
    Benediction {
        reference: "2 Peter 3:18",
        text: "May you grow in the grace and knowledge of our Lord and Savior Jesus Christ. To him be the glory both now and to the day of eternity. Amen.",
    },
    Benediction {
        reference: "2 John 3",
        text: "Grace, mercy, and peace will be with us, from God the Father and from Jesus Christ the Father\u{2019}s Son, in truth and love.",
    },
    Benediction {
        reference: "Jude 24-25",
        text: "Now to him who is able to keep you from stumbling and to present you blameless before the presence of his glory with great joy, to the only God, our Savior, through Jesus Christ our Lord, be glory, majesty, dominion, and authority, before all time and now and forever. Amen.",
    },
    Benediction {
        reference: "Revelation 1:5-6",
        text: "To him who loves us and has freed us from our sins by his blood and made us a kingdom, priests to his God and Father, to him be glory and dominion forever and ever. Amen.",
    },
    Benediction {
        reference: "Revelation 5:12-13",
        text: "Worthy is the Lamb who was slain, to receive power and wealth and wisdom and might and honor and glory and blessing! To him who sits on the throne and to the Lamb be blessing and honor and glory and might forever and ever!",
    },
    Benediction {
        reference: "Revelation 7:12",
        text: "Amen! Blessing and glory and wisdom and thanksgiving and honor and power and might be to our God forever and ever! Amen.",
    },
    Benediction {
        reference: "Revelation 22:20-21",
        text: "He who testifies to these things says, \u{201c}Surely I am coming soon.\u{201d} Amen. Come, Lord Jesus! The grace of the Lord Jesus be with all. Amen.",
    },
    Benediction {
        reference: "Psalm 121:7-8",
        text: "The LORD will keep you from all harm\u{2014}he will watch over your life; the LORD will watch over your coming and going both now and forevermore.",
    },
];

/// The benediction for a plan day (day < 1 clamped to 1)
pub fn benediction_for_day(plan_day: u32) -> &'static Benediction {
    let plan_day = plan_day.max(1) as usize;
    &BENEDICTIONS[(plan_day - 1) % BENEDICTIONS.len()]
}
