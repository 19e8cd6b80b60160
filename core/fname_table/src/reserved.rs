//! Hardcoded names registered at fixed indices during bootstrap.
//!
//! The index of each name is its enum value, not its position in the list.
//! Both ends of a connection agree on this table, which is what lets an
//! index at or below the network watermark travel as a bare integer.

macro_rules! reserved_names {
    ($($variant:ident = $index:literal => $text:literal,)*) => {
        /// Hardcoded name indices.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum EName {
            $($variant = $index,)*
        }

        impl EName {
            /// Every hardcoded name, in declaration order.
            pub const ALL: &'static [EName] = &[$(EName::$variant,)*];

            /// `(index, text)` pairs in declaration order, ready for bootstrap.
            pub const RESERVED: &'static [(u32, &'static str)] = &[$(($index, $text),)*];

            /// The registered spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(EName::$variant => $text,)*
                }
            }

            /// Reverse lookup of a reserved index.
            pub const fn from_index(index: u32) -> Option<EName> {
                match index {
                    $($index => Some(EName::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

reserved_names! {
    // Special zero value, meaning no name.
    None = 0 => "None",

    // Property types.
    ByteProperty = 1 => "ByteProperty",
    IntProperty = 2 => "IntProperty",
    BoolProperty = 3 => "BoolProperty",
    FloatProperty = 4 => "FloatProperty",
    ObjectProperty = 5 => "ObjectProperty",
    NameProperty = 6 => "NameProperty",
    DelegateProperty = 7 => "DelegateProperty",
    DoubleProperty = 8 => "DoubleProperty",
    ArrayProperty = 9 => "ArrayProperty",
    StructProperty = 10 => "StructProperty",
    VectorProperty = 11 => "VectorProperty",
    RotatorProperty = 12 => "RotatorProperty",
    StrProperty = 13 => "StrProperty",
    TextProperty = 14 => "TextProperty",
    InterfaceProperty = 15 => "InterfaceProperty",
    MulticastDelegateProperty = 16 => "MulticastDelegateProperty",
    WeakObjectProperty = 17 => "WeakObjectProperty",
    LazyObjectProperty = 18 => "LazyObjectProperty",
    AssetObjectProperty = 19 => "AssetObjectProperty",
    UInt64Property = 20 => "UInt64Property",
    UInt32Property = 21 => "UInt32Property",
    UInt16Property = 22 => "UInt16Property",
    Int64Property = 23 => "Int64Property",
    Int16Property = 25 => "Int16Property",
    Int8Property = 26 => "Int8Property",
    AssetSubclassOfProperty = 27 => "AssetSubclassOfProperty",

    // Special packages.
    Core = 30 => "Core",
    Engine = 31 => "Engine",
    Editor = 32 => "Editor",
    CoreUObject = 33 => "CoreUObject",

    // Special types.
    Cylinder = 50 => "Cylinder",
    BoxSphereBounds = 51 => "BoxSphereBounds",
    Sphere = 52 => "Sphere",
    Box = 53 => "Box",
    Vector2D = 54 => "Vector2D",
    IntRect = 55 => "IntRect",
    IntPoint = 56 => "IntPoint",
    Vector4 = 57 => "Vector4",
    Name = 58 => "Name",
    Vector = 59 => "Vector",
    Rotator = 60 => "Rotator",
    SHVector = 61 => "SHVector",
    Color = 62 => "Color",
    Plane = 63 => "Plane",
    Matrix = 64 => "Matrix",
    LinearColor = 65 => "LinearColor",
    AdvanceFrame = 66 => "AdvanceFrame",
    Pointer = 67 => "Pointer",
    Double = 68 => "Double",
    Quat = 69 => "Quat",
    SelfName = 70 => "Self",
    Transform = 71 => "Transform",

    // Object class names.
    Object = 100 => "Object",
    Camera = 101 => "Camera",
    Actor = 102 => "Actor",
    ObjectRedirector = 103 => "ObjectRedirector",
    ObjectArchetype = 104 => "ObjectArchetype",
    Class = 105 => "Class",

    // Misc.
    State = 200 => "State",
    True = 201 => "TRUE",
    False = 202 => "FALSE",
    Enum = 203 => "Enum",
    Default = 204 => "Default",
    Skip = 205 => "Skip",
    Input = 206 => "Input",
    Package = 207 => "Package",
    Groups = 208 => "Groups",
    Interface = 209 => "Interface",
    Components = 210 => "Components",
    Global = 211 => "Global",
    Super = 212 => "Super",
    Outer = 213 => "Outer",
    Map = 214 => "Map",
    Role = 215 => "Role",
    RemoteRole = 216 => "RemoteRole",
    PersistentLevel = 217 => "PersistentLevel",
    TheWorld = 218 => "TheWorld",
    PackageMetaData = 219 => "PackageMetaData",
    InitialState = 220 => "InitialState",
    Game = 221 => "Game",
    SelectionColor = 222 => "SelectionColor",
    UI = 223 => "UI",
    ExecuteUbergraph = 224 => "ExecuteUbergraph",
    DeviceID = 225 => "DeviceID",
    RootStat = 226 => "RootStat",
    MoveActor = 227 => "MoveActor",
    All = 230 => "All",
    MeshEmitterVertexColor = 231 => "MeshEmitterVertexColor",
    TextureOffsetParameter = 232 => "TextureOffsetParameter",
    TextureScaleParameter = 233 => "TextureScaleParameter",
    ImpactVel = 234 => "ImpactVel",
    SlideVel = 235 => "SlideVel",
    TextureOffset1Parameter = 236 => "TextureOffset1Parameter",
    MeshEmitterDynamicParameter = 237 => "MeshEmitterDynamicParameter",
    ExpressionInput = 238 => "ExpressionInput",
    Untitled = 239 => "Untitled",
    Timer = 240 => "Timer",
    Team = 241 => "Team",
    Low = 242 => "Low",
    High = 243 => "High",
    NetworkGUID = 244 => "NetworkGUID",
    GameThread = 245 => "GameThread",
    RenderThread = 246 => "RenderThread",
    OtherChildren = 247 => "OtherChildren",
    Location = 248 => "Location",
    Rotation = 249 => "Rotation",
    BSP = 250 => "BSP",
    EditorSettings = 251 => "EditorSettings",

    // Online.
    DGram = 280 => "DGram",
    Stream = 281 => "Stream",
    GameNetDriver = 282 => "GameNetDriver",
    PendingNetDriver = 283 => "PendingNetDriver",
    BeaconNetDriver = 284 => "BeaconNetDriver",
    FlushNetDormancy = 285 => "FlushNetDormancy",
    DemoNetDriver = 286 => "DemoNetDriver",
    GameSession = 287 => "GameSession",
    PartySession = 288 => "PartySession",
    GamePort = 289 => "GamePort",
    BeaconPort = 290 => "BeaconPort",
    MeshPort = 291 => "MeshPort",
    MeshNetDriver = 292 => "MeshNetDriver",

    // Texture settings.
    Linear = 300 => "Linear",
    Point = 301 => "Point",
    Aniso = 302 => "Aniso",
    LightMapResolution = 303 => "LightMapResolution",

    // Sound.
    UnGrouped = 311 => "UnGrouped",
    VoiceChat = 312 => "VoiceChat",

    // Optimization.
    Playing = 320 => "Playing",
    Spectating = 322 => "Spectating",
    Inactive = 325 => "Inactive",

    // Log messages.
    PerfWarning = 350 => "PerfWarning",
    Info = 351 => "Info",
    Init = 352 => "Init",
    Exit = 353 => "Exit",
    Cmd = 354 => "Cmd",
    Warning = 355 => "Warning",
    Error = 356 => "Error",

    // File format backwards-compatibility.
    FontCharacter = 400 => "FontCharacter",
    InitChild2StartBone = 401 => "InitChild2StartBone",
    SoundCueLocalized = 402 => "SoundCueLocalized",
    SoundCue = 403 => "SoundCue",
    RawDistributionFloat = 404 => "RawDistributionFloat",
    RawDistributionVector = 405 => "RawDistributionVector",
    InterpCurveFloat = 406 => "InterpCurveFloat",
    InterpCurveVector2D = 407 => "InterpCurveVector2D",
    InterpCurveVector = 408 => "InterpCurveVector",
    InterpCurveTwoVectors = 409 => "InterpCurveTwoVectors",
    InterpCurveQuat = 410 => "InterpCurveQuat",

    // Everything past the network watermark is local-only.
    AI = 450 => "AI",
    NavMesh = 451 => "NavMesh",
    PerformanceCapture = 500 => "PerformanceCapture",
    EditorLayout = 600 => "EditorLayout",
    EditorKeyBindings = 601 => "EditorKeyBindings",
    GameUserSettings = 602 => "GameUserSettings",
}

impl EName {
    /// Highest hardcoded index.
    pub const MAX_INDEX: u32 = 602;

    /// The reserved slot index.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }
}
